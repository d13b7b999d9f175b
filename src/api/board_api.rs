// ==========================================
// 일정 보드 - 보드 API
// ==========================================
// 저장소는 단일 소유 공유 상태: 변형은 전부 이 API 의 뮤텍스
// 아래에서 일어난다 (하루 수집-후-제거, 꺼내기-후-복원의 원자성).
// 변형이 있을 때마다 전체 목록을 저장소 계층으로 내려보낸다.
// 유일하게 중단(suspend)되는 연산은 파일 가져오기의 읽기 경로다.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::HolidayCalendar;
use crate::domain::{CalendarCell, ClickOutcome, ImportMode, Schedule, WorkMode};
use crate::engine::{
    BoardController, DayClassifier, MonthGridGenerator, ScheduleStore, SpreadsheetBridge,
};
use crate::engine::spreadsheet::SheetRow;
use crate::exporter::ExcelWriter;
use crate::i18n::t_with_args;
use crate::importer::UniversalFileParser;
use crate::repository::ScheduleRepository;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

// 뮤텍스 안쪽의 보드 상태 (저장소 + 컨트롤러는 항상 함께 잠긴다)
struct BoardInner {
    store: ScheduleStore,
    controller: BoardController,
}

// ==========================================
// BoardApi
// ==========================================
pub struct BoardApi {
    inner: Mutex<BoardInner>,
    repo: Arc<ScheduleRepository>,
    classifier: DayClassifier,
}

impl BoardApi {
    /// 저장소에서 재수화하여 생성
    ///
    /// 저장된 목록이 없으면 빈 상태로 시작한다.
    pub fn new(repo: Arc<ScheduleRepository>, calendar: HolidayCalendar) -> ApiResult<Self> {
        let records = repo.load_all()?;
        tracing::info!("일정 {}건 로드", records.len());

        Ok(Self {
            inner: Mutex::new(BoardInner {
                store: ScheduleStore::from_records(records),
                controller: BoardController::new(),
            }),
            repo,
            classifier: DayClassifier::new(calendar),
        })
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, BoardInner>> {
        self.inner
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }

    // ==========================================
    // 그리드 / 조회
    // ==========================================

    /// 표시 월의 그리드 칸 계산 (매 호출 재계산, 캐시 없음)
    pub fn grid(&self, month: NaiveDate) -> ApiResult<Vec<CalendarCell>> {
        let inner = self.lock()?;
        Ok(MonthGridGenerator::cells(
            month,
            inner.store.records(),
            &self.classifier,
        ))
    }

    /// 전체 일정 스냅샷
    pub fn schedules(&self) -> ApiResult<Vec<Schedule>> {
        let inner = self.lock()?;
        Ok(inner.store.records().to_vec())
    }

    // ==========================================
    // 모드 / 클릭 / 되돌리기
    // ==========================================

    /// 작업 모드 전환
    pub fn set_mode(&self, mode: WorkMode) -> ApiResult<()> {
        let mut inner = self.lock()?;
        inner.controller.set_mode(mode);
        Ok(())
    }

    /// 현재 작업 모드
    pub fn mode(&self) -> ApiResult<WorkMode> {
        let inner = self.lock()?;
        Ok(inner.controller.mode())
    }

    /// 날짜 칸 클릭 (모드에 따라 선택/복사/삭제)
    pub fn cell_click(&self, date: &str) -> ApiResult<ClickOutcome> {
        let mut inner = self.lock()?;
        let BoardInner { store, controller } = &mut *inner;
        let outcome = controller.cell_click(store, date);

        // 저장소가 변형된 경우에만 영속화
        if matches!(&outcome, ClickOutcome::Pasted(_) | ClickOutcome::Deleted(_)) {
            self.repo.replace_all(inner.store.records())?;
        }
        Ok(outcome)
    }

    /// 마지막 삭제 배치 복원 (복원 건수 반환, 빈 스택이면 0)
    pub fn undo(&self) -> ApiResult<usize> {
        let mut inner = self.lock()?;
        let BoardInner { store, controller } = &mut *inner;
        let restored = controller.undo(store);

        if restored == 0 {
            tracing::info!("{}", crate::i18n::t("undo.empty"));
            return Ok(0);
        }

        self.repo.replace_all(inner.store.records())?;
        Ok(restored)
    }

    /// 되돌리기 스택 깊이 (UI 카운터)
    pub fn undo_depth(&self) -> ApiResult<usize> {
        let inner = self.lock()?;
        Ok(inner.controller.undo_depth())
    }

    // ==========================================
    // 하루 단위 편집 (상세 화면 저장 경로)
    // ==========================================

    /// 한 날짜의 일정을 주어진 목록으로 교체
    ///
    /// 전달된 레코드의 date 는 대상 날짜로 강제된다
    /// (date 가 일 단위 연산의 파티션 키라는 불변식 유지).
    pub fn replace_day(&self, date: &str, schedules: Vec<Schedule>) -> ApiResult<()> {
        let mut inner = self.lock()?;
        inner.store.remove_by_date(date);
        let pinned: Vec<Schedule> = schedules
            .into_iter()
            .map(|mut s| {
                s.date = date.to_string();
                s
            })
            .collect();
        inner.store.add_batch(pinned);
        self.repo.replace_all(inner.store.records())?;
        Ok(())
    }

    // ==========================================
    // 내보내기 / 가져오기
    // ==========================================

    /// 표시 월의 일정을 표 행으로 (비어 있을 수 있음)
    pub fn export_month(&self, month: NaiveDate) -> ApiResult<Vec<SheetRow>> {
        let inner = self.lock()?;
        Ok(SpreadsheetBridge::export_rows(&inner.store, month))
    }

    /// 표시 월을 Excel 파일로 기록
    ///
    /// # 반환
    /// - Ok(Some(path)): 기록된 파일 경로
    /// - Ok(None): 해당 월 일정 없음 (파일 미생성, 알림만)
    pub fn export_month_to_file(&self, month: NaiveDate, dir: &Path) -> ApiResult<Option<PathBuf>> {
        let month_key = month.format("%Y-%m").to_string();
        let rows = self.export_month(month)?;

        if rows.is_empty() {
            tracing::info!("{}", t_with_args("export.empty_month", &[("month", &month_key)]));
            return Ok(None);
        }

        let path = ExcelWriter::write_month(&rows, dir, &month_key)?;
        Ok(Some(path))
    }

    /// 느슨한 표 행을 가져와 저장소에 반영 (가져온 건수 반환)
    pub fn import_rows(
        &self,
        rows: &[HashMap<String, String>],
        mode: ImportMode,
    ) -> ApiResult<usize> {
        let imported = SpreadsheetBridge::map_rows(rows);
        let count = imported.len();

        let mut inner = self.lock()?;
        SpreadsheetBridge::apply_import(&mut inner.store, imported, mode);
        self.repo.replace_all(inner.store.records())?;

        tracing::info!("{}", t_with_args("import.done", &[("count", &count.to_string())]));
        Ok(count)
    }

    /// 파일에서 가져오기 (읽기 경로만 비동기)
    ///
    /// 파싱 실패 시 오류를 돌려주고 저장소는 손대지 않는다.
    pub async fn import_from_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        mode: ImportMode,
    ) -> ApiResult<usize> {
        let path = file_path.as_ref().to_path_buf();
        let rows = tokio::task::spawn_blocking(move || UniversalFileParser::parse(&path))
            .await
            .map_err(|e| ApiError::InternalError(e.to_string()))??;

        self.import_rows(&rows, mode)
    }
}
