use super::Pair;
use std::collections::HashMap;
use std::ops::Range;

/// Stand-in for SQL NULL. Missing values are plotted as zero.
const NULL: &str = "0";
/// Fraction of the data span added on each side of the axis.
const PAD: f64 = 0.05;
/// Widest window the mesh can lay ticks out on; its tick scale is a
/// power of ten just above the span and must stay finite.
const SPAN: f64 = 1e300;
/// Upper bound on tick marks requested from the mesh.
const TICKS: usize = 10;

/// Plot coordinates for one column.
///
/// A column whose values all parse as finite numbers is numeric;
/// anything else is categorical, with each distinct value placed at
/// an integer position in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Numeric(Vec<f64>),
    Categorical { labels: Vec<String>, codes: Vec<f64> },
}

impl Axis {
    /// Split fetched rows into x and y axes.
    pub fn pair(rows: Vec<Pair>) -> (Self, Self) {
        let (x, y) = rows.into_iter().unzip::<_, _, Vec<_>, Vec<_>>();
        (Self::from_iter(x), Self::from_iter(y))
    }
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Numeric(values) => values,
            Self::Categorical { codes, .. } => codes,
        }
    }
    pub fn len(&self) -> usize {
        self.values().len()
    }
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
    /// Visible window: padded data bounds, never empty.
    ///
    /// Fails when the data spans more than [`SPAN`], since no drawable
    /// window exists for it.
    pub fn range(&self) -> anyhow::Result<Range<f64>> {
        match self {
            Self::Categorical { labels, .. } => Ok(-0.5..labels.len().max(1) as f64 - 0.5),
            Self::Numeric(values) if values.is_empty() => Ok(0.0..1.0),
            Self::Numeric(values) => {
                let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                window(lo, hi)
            }
        }
    }
    pub fn ticks(&self) -> usize {
        match self {
            Self::Numeric(_) => TICKS,
            Self::Categorical { labels, .. } => labels.len().clamp(1, 2 * TICKS),
        }
    }
    /// Tick label at a coordinate.
    pub fn label(&self, at: f64) -> String {
        match self {
            Self::Numeric(_) => {
                let text = format!("{:.3}", at);
                let text = text.trim_end_matches('0').trim_end_matches('.');
                match text {
                    "-0" => "0".to_string(),
                    text => text.to_string(),
                }
            }
            Self::Categorical { labels, .. } => {
                let index = at.round();
                if (at - index).abs() < 1e-6 && index >= 0.0 {
                    labels.get(index as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            }
        }
    }
}

/// Pad `lo..hi` on both sides, dropping the padding on whichever side
/// would push the window past [`SPAN`].
fn window(lo: f64, hi: f64) -> anyhow::Result<Range<f64>> {
    let pad = match hi - lo {
        span if span == 0.0 => (lo.abs() * PAD).clamp(0.5, SPAN / 2.0),
        span => span * PAD,
    };
    [(lo - pad, hi + pad), (lo - pad, hi), (lo, hi + pad), (lo, hi)]
        .into_iter()
        .find(|(start, end)| end > start && end - start <= SPAN)
        .map(|(start, end)| start..end)
        .ok_or_else(|| anyhow::anyhow!("axis from {:e} to {:e} cannot be drawn", lo, hi))
}

impl FromIterator<Option<String>> for Axis {
    fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
        let raw = iter
            .into_iter()
            .map(|value| value.unwrap_or_else(|| NULL.to_string()))
            .collect::<Vec<String>>();
        let numeric = raw
            .iter()
            .map(|s| s.trim().parse::<f64>().ok().filter(|f| f.is_finite()))
            .collect::<Option<Vec<f64>>>();
        match numeric {
            Some(values) => Self::Numeric(values),
            None => {
                let mut index = HashMap::<String, usize>::new();
                let mut labels = Vec::new();
                let codes = raw
                    .into_iter()
                    .map(|s| {
                        *index.entry(s).or_insert_with_key(|s| {
                            labels.push(s.clone());
                            labels.len() - 1
                        }) as f64
                    })
                    .collect();
                Self::Categorical { labels, codes }
            }
        }
    }
}
