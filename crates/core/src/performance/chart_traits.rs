use crate::errors::Result;
use crate::performance::CumulativeReturnChart;

/// Draws a cumulative return chart. The library ships no drawing backend;
/// callers plug one in here.
pub trait ChartRendererTrait {
    fn render(&self, chart: &CumulativeReturnChart) -> Result<()>;
}
