
/// 테스트용 로거 초기화 (RUST_LOG로 조절)
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
