// ==========================================
// 일정 보드 - 일정 저장소 (SQLite)
// ==========================================
// 영속화 계약: load_all 은 저장된 전체 목록을 돌려주고
// (없으면 빈 목록 = "빈 상태로 시작"), replace_all 은 현재 전체
// 목록으로 기존 저장 상태를 통째로 교체한다. 부분 저장 없음.
// ==========================================

use crate::db;
use crate::domain::Schedule;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ScheduleRepository
// ==========================================
pub struct ScheduleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ScheduleRepository {
    /// 데이터베이스 경로로 저장소 생성 (테이블 자동 생성)
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_schema()?;
        Ok(repo)
    }

    /// 기존 연결 공유로 생성
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_schema()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS schedule (
                id          TEXT PRIMARY KEY,
                date        TEXT NOT NULL,
                start_time  TEXT NOT NULL,
                end_time    TEXT NOT NULL,
                title       TEXT NOT NULL
            );
            -- 일 단위 조회가 지배적이므로 date 인덱스 유지
            CREATE INDEX IF NOT EXISTS idx_schedule_date ON schedule(date);
            "#,
        )?;
        Ok(())
    }

    /// 저장된 전체 일정 로드
    ///
    /// 저장된 것이 없으면 빈 목록을 반환한다 (빈 상태로 시작).
    pub fn load_all(&self) -> RepositoryResult<Vec<Schedule>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, start_time, end_time, title
            FROM schedule
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Schedule {
                id: row.get(0)?,
                date: row.get(1)?,
                start_time: row.get(2)?,
                end_time: row.get(3)?,
                title: row.get(4)?,
            })
        })?;

        let mut schedules = Vec::new();
        for row in rows {
            schedules.push(row?);
        }
        Ok(schedules)
    }

    /// 전체 목록 교체 저장 (트랜잭션)
    ///
    /// 기존 저장 상태를 전부 지우고 현재 목록을 기록한다.
    pub fn replace_all(&self, schedules: &[Schedule]) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute("DELETE FROM schedule", [])?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO schedule (id, date, start_time, end_time, title)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;
            for s in schedules {
                stmt.execute(params![s.id, s.date, s.start_time, s.end_time, s.title])?;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        tracing::debug!("일정 {}건 저장", schedules.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_repo() -> (tempfile::NamedTempFile, ScheduleRepository) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let repo = ScheduleRepository::new(file.path().to_str().unwrap()).unwrap();
        (file, repo)
    }

    #[test]
    fn test_load_from_fresh_db_is_empty() {
        let (_file, repo) = temp_repo();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_then_load_roundtrip() {
        let (_file, repo) = temp_repo();
        let schedules = vec![
            Schedule::new("2026-05-05", "10:00", "11:00", "회의"),
            Schedule::new("2026-05-06", "14:00", "15:00", "점검"),
        ];

        repo.replace_all(&schedules).unwrap();
        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded, schedules);
    }

    #[test]
    fn test_replace_all_fully_replaces() {
        let (_file, repo) = temp_repo();
        repo.replace_all(&[Schedule::new("2026-05-05", "10:00", "11:00", "A")])
            .unwrap();

        let next = vec![Schedule::new("2026-06-01", "09:00", "10:00", "B")];
        repo.replace_all(&next).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "B");
    }

    #[test]
    fn test_reopen_same_db_preserves_data() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        {
            let repo = ScheduleRepository::new(&path).unwrap();
            repo.replace_all(&[Schedule::new("2026-05-05", "10:00", "11:00", "A")])
                .unwrap();
        }

        let repo = ScheduleRepository::new(&path).unwrap();
        assert_eq!(repo.load_all().unwrap().len(), 1);
    }
}
