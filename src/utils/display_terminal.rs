//! 터미널 출력 유틸리티
//!
//! 시작 시 초기화 결과를 사람이 읽기 쉬운 형태로 출력합니다.
//! 로그 레벨과 무관하게 항상 표준 출력에 표시됩니다.

pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 인증 초기화 결과 요약을 출력합니다.
///
/// # Arguments
///
/// * `project_id` - Firebase 프로젝트 ID
/// * `environment` - 실행 환경 이름
/// * `provider_id` - 등록된 프로바이더 ID
/// * `emulator_url` - 에뮬레이터에 연결된 경우 그 주소
pub fn print_auth_summary(
    project_id: &str,
    environment: &str,
    provider_id: &str,
    emulator_url: Option<&str>,
) {
    println!();
    print_boxed_title("🔐 FIREBASE AUTH INITIALIZED");
    print_sub_task("Project", project_id);
    print_sub_task("Environment", environment);
    print_sub_task("Provider", provider_id);
    print_sub_task("Endpoint", emulator_url.unwrap_or("identitytoolkit.googleapis.com"));
    println!();
}
