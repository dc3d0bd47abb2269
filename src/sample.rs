use anyhow::ensure;
use marktest::{Registry, TestContainer, register};

/// Container run by the bundled binary.
#[derive(Debug, Default)]
pub struct SampleSuite {
    sum: i32,
}

impl SampleSuite {
    fn setup(&mut self) {
        println!("Before each test");
        self.sum = 1 + 1;
    }

    fn test_example_pass(&mut self) -> anyhow::Result<()> {
        ensure!(self.sum == 2, "expected 2 but got {}", self.sum);
        Ok(())
    }

    fn test_example_fail(&mut self) -> anyhow::Result<()> {
        ensure!(self.sum == 3, "expected 3 but got {}", self.sum);
        Ok(())
    }

    fn teardown(&mut self) {
        println!("After each test");
    }
}

impl TestContainer for SampleSuite {
    fn create() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    fn register(registry: &mut Registry<Self>) {
        register!(registry, SampleSuite {
            before_each setup,
            test test_example_pass,
            test test_example_fail,
            after_each teardown,
        });
    }
}
