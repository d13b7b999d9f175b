// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 사용, 한국어(기본)와 영어 지원
// 주의: rust_i18n::i18n! 매크로는 lib.rs에서 초기화됨
// ==========================================

/// 현재 언어 조회
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 언어 설정
///
/// # 인자
/// - locale: 언어 코드 ("ko" 또는 "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 메시지 번역 (인자 없음)
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 메시지 번역 (인자 포함)
///
/// # 예시
/// ```no_run
/// use schedule_board::i18n::t_with_args;
/// let msg = t_with_args("export.empty_month", &[("month", "2026-05")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
