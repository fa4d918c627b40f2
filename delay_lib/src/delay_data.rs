/** ------------------------------------------------------------
 * Delay series struct used throughout the library.
 * ------------------------------------------------------------- */
/**
 * Accumulated (number, delay) rows from one analysis pass
 *
 * `numbers` holds capture-order packet numbers for the arrival variant
 * and sequence numbers for the sequence variant. Rows are kept in
 * emission order.
 */
#[derive(Debug)]
pub struct DelaySeries {
    pub numbers: Vec<u32>,
    pub delays: Vec<f64>,
}

/**
 * Constructor
 */
impl DelaySeries {
    pub fn new() -> Self {
        Self {
            numbers: Vec::new(),
            delays: Vec::new(),
        }
    }

    pub fn push(&mut self, number: u32, delay: f64) {
        self.numbers.push(number);
        self.delays.push(delay);
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Default for DelaySeries {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u32, f64)> for DelaySeries {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut series = DelaySeries::new();
        for (number, delay) in iter {
            series.push(number, delay);
        }

        series
    }
}
