//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 어떤 저장소와 로그인 방식이 활성화됐는지 보여주는
//! 배너 출력 함수들입니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  🔐 SECRET BOARD                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: Connecting identity store`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Identity store ready (3 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// `   ├─ MongoDB: secret_board`
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 준비 완료 요약을 출력합니다
///
/// # Arguments
///
/// * `bind_address` - 서버가 바인딩한 주소
/// * `providers` - 활성화된 로그인 방식 이름
/// * `push_enabled` - 푸시 알림 발송 여부
pub fn print_final_summary(bind_address: &str, providers: &[&str], push_enabled: bool) {
    println!();
    print_boxed_title("🎉 SECRET BOARD READY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   🔑 Login methods: {}", providers.join(", "));
    println!(
        "   🔔 Push notifications: {}",
        if push_enabled { "enabled" } else { "disabled" }
    );
    println!();
}
