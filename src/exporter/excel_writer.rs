// ==========================================
// 일정 보드 - Excel 기록기
// ==========================================
// rust_xlsxwriter 로 단일 시트("월간일정") 파일을 만든다.
// 파일명 규약: "<YYYY-MM>_일정관리.xlsx"
// ==========================================

use crate::engine::spreadsheet::{SheetRow, EXPORT_SHEET_NAME};
use crate::exporter::error::ExportResult;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

// ==========================================
// ExcelWriter
// ==========================================
pub struct ExcelWriter;

impl ExcelWriter {
    /// 월 키("YYYY-MM")에 대한 규약 파일명
    pub fn file_name(month_key: &str) -> String {
        format!("{}_일정관리.xlsx", month_key)
    }

    /// 표 행을 Excel 파일로 기록
    ///
    /// # 인자
    /// - rows: 이미 필터/정렬이 끝난 행 (비어 있으면 호출자가 미리 거른다)
    /// - path: 출력 파일 경로
    pub fn write_rows(rows: &[SheetRow], path: &Path) -> ExportResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(EXPORT_SHEET_NAME)?;

        // 헤더 행
        let header_format = Format::new().set_bold();
        for (col, header) in SheetRow::headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        worksheet.set_column_width(0, 12)?;
        worksheet.set_column_width(3, 24)?;

        // 데이터 행
        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            worksheet.write_string(r, 0, &row.date)?;
            worksheet.write_string(r, 1, &row.start_time)?;
            worksheet.write_string(r, 2, &row.end_time)?;
            worksheet.write_string(r, 3, &row.title)?;
        }

        workbook.save(path)?;
        tracing::info!("Excel 내보내기 완료: {} ({}행)", path.display(), rows.len());
        Ok(())
    }

    /// 디렉터리와 월 키로 규약 경로를 만들어 기록
    pub fn write_month(rows: &[SheetRow], dir: &Path, month_key: &str) -> ExportResult<PathBuf> {
        let path = dir.join(Self::file_name(month_key));
        Self::write_rows(rows, &path)?;
        Ok(path)
    }
}
