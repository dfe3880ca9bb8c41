/// Progress curve applied to the normalized time within a move segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    #[default]
    InOutCubic,
}

impl Ease {
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    /// Polynomial degree and phase of the curve.
    fn shape(self) -> (i32, Phase) {
        match self {
            Self::Linear => (1, Phase::In),
            Self::InQuad => (2, Phase::In),
            Self::OutQuad => (2, Phase::Out),
            Self::InOutQuad => (2, Phase::InOut),
            Self::InCubic => (3, Phase::In),
            Self::OutCubic => (3, Phase::Out),
            Self::InOutCubic => (3, Phase::InOut),
        }
    }

    /// Maps segment progress `u` to eased progress. `u` is clamped to `[0, 1]`; NaN reads as 0.
    pub fn apply(self, u: f64) -> f64 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let (n, phase) = self.shape();
        match phase {
            Phase::In => u.powi(n),
            Phase::Out => 1.0 - (1.0 - u).powi(n),
            Phase::InOut if u < 0.5 => (2.0 * u).powi(n) / 2.0,
            Phase::InOut => 1.0 - (2.0 - 2.0 * u).powi(n) / 2.0,
        }
    }
}

#[derive(Clone, Copy)]
enum Phase {
    In,
    Out,
    InOut,
}
