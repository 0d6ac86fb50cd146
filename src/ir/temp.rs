use crate::utils::config::ir::TEMP_PREFIX;

/// Supplier of temporary names `t0, t1, ...` for three address code.
/// Numbering restarts only on [`TempNames::reset`].
#[derive(Debug, Default, Clone)]
pub struct TempNames {
    counter: usize,
}

impl TempNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("{}{}", TEMP_PREFIX, self.counter);
        self.counter += 1;
        name
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// How many names were handed out since the last reset.
    pub fn issued(&self) -> usize {
        self.counter
    }
}
