#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub players: usize,
    pub max_steps: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            players: 3,
            max_steps: 5000,
        }
    }
}
