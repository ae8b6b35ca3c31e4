use std::sync::Once;
use test_context::TestContext;

static INIT_LOGGER: Once = Once::new();

pub struct UsingLogger;

impl TestContext for UsingLogger {
    fn setup() -> UsingLogger {
        INIT_LOGGER.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
        UsingLogger
    }

    fn teardown(self) {}
}

pub const NO_CLUES: &[&str] = &[];

pub const FRUITS: [&str; 12] = [
    "apple", "banana", "cherry", "grape", "lemon", "mango", "orange", "papaya", "peach", "pear",
    "plum", "melon",
];
