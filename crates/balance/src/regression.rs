//! Table-driven evaluation of the DWA-A102 regression equations.
//!
//! Each surface or measure type is described by a [`Model`]: at most two
//! destinations computed from a [`Regression`] and one destination derived as
//! the remainder, either plain or clamped at zero ([`Balance`]). Destinations
//! that are neither regressed nor derived stay at zero.
//!
//! A regression is a sum of [`Term`]s over named input [`Var`]iables. The term
//! shapes cover every equation in the catalogue (logarithms, shifted
//! reciprocals, exponentials of reciprocals and a few products), which keeps
//! the coefficients of every type in one auditable table
//! (see [`catalogue`](crate::catalogue)).

use tracing::warn;

use crate::partition::{Destination, Partition};

/// Input variables a regression term can refer to.
///
/// Units are those of the DWA-A102 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    /// Annual precipitation `P` (mm/a).
    Precipitation,
    /// Annual potential evapotranspiration `ETp` (mm/a).
    Evapotranspiration,
    /// Storage height `Sp` (mm).
    StorageHeight,
    /// Installation height `h` (mm).
    InstallationHeight,
    /// Hydraulic conductivity `kf` (mm/h).
    Conductivity,
    /// Field capacity minus wilting point `WKmax - WP` (-).
    WaterCapacity,
    /// Joint ratio `FA` (%).
    JointRatio,
    /// Infiltration area relative to the connected area, `FAsf` / `FAsm` (%).
    AreaShare,
    /// Throttled discharge yield `qDr` (l/(s·ha)).
    ThrottledDischarge,
    /// Specific storage volume `VSp` (mm).
    StorageVolume,
    /// Daily service water demand `VBr` (mm/d).
    ServiceDemand,
    /// Annual irrigation volume `VBw = FAbw · qBw` (mm/a).
    IrrigationVolume,
    /// Usable volume `Vnmin = min(P, 365 · VBr + VBw)` (mm/a).
    UsableVolume,
}

impl Var {
    const COUNT: usize = 13;
}

/// Values of the input variables for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs([f64; Var::COUNT]);

impl Inputs {
    /// Creates inputs from the study climate; all other variables are zero.
    #[must_use]
    pub fn new(precipitation: f64, evapotranspiration: f64) -> Self {
        Self([0.0; Var::COUNT])
            .with(Var::Precipitation, precipitation)
            .with(Var::Evapotranspiration, evapotranspiration)
    }

    /// Returns `self` with `var` set to `value`.
    #[must_use]
    pub fn with(mut self, var: Var, value: f64) -> Self {
        self.0[var as usize] = value;
        self
    }

    #[must_use]
    pub fn get(&self, var: Var) -> f64 {
        self.0[var as usize]
    }
}

/// One additive term of a regression equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    /// `c`
    Constant(f64),
    /// `c · x`
    Linear(f64, Var),
    /// `c · x²`
    Square(f64, Var),
    /// `c · ln(x)`
    Ln(f64, Var),
    /// `c · ln(x + 1)`
    LnOnePlus(f64, Var),
    /// `c · log10(x)`
    Log10(f64, Var),
    /// `c / x`
    Inverse(f64, Var),
    /// `c / (shift + x)`
    ShiftedInverse { coef: f64, shift: f64, var: Var },
    /// `c · exp(scale / x)`
    ExpInverse { coef: f64, scale: f64, var: Var },
    /// `c · x · y`
    Product(f64, Var, Var),
    /// `c · ln(x · y)`
    LnProduct(f64, Var, Var),
    /// `c · ln(x / y)`
    LnRatio(f64, Var, Var),
    /// `c / (y - shift) · x^exponent`
    PowerOverShifted {
        coef: f64,
        var: Var,
        exponent: f64,
        over: Var,
        shift: f64,
    },
}

impl Term {
    /// Evaluates the term.
    #[must_use]
    pub fn eval(&self, inputs: &Inputs) -> f64 {
        let x = |var: Var| inputs.get(var);
        match *self {
            Term::Constant(c) => c,
            Term::Linear(c, v) => c * x(v),
            Term::Square(c, v) => c * x(v).powi(2),
            Term::Ln(c, v) => c * x(v).ln(),
            Term::LnOnePlus(c, v) => c * (x(v) + 1.0).ln(),
            Term::Log10(c, v) => c * x(v).log10(),
            Term::Inverse(c, v) => c / x(v),
            Term::ShiftedInverse { coef, shift, var } => coef / (shift + x(var)),
            Term::ExpInverse { coef, scale, var } => coef * (scale / x(var)).exp(),
            Term::Product(c, u, v) => c * x(u) * x(v),
            Term::LnProduct(c, u, v) => c * (x(u) * x(v)).ln(),
            Term::LnRatio(c, u, v) => c * (x(u) / x(v)).ln(),
            Term::PowerOverShifted {
                coef,
                var,
                exponent,
                over,
                shift,
            } => (coef / (x(over) - shift)) * x(var).powf(exponent),
        }
    }
}

/// A regression equation: the sum of its terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub terms: &'static [Term],
    /// When set, the regression yields zero whenever this variable is zero.
    pub gate: Option<Var>,
}

impl Regression {
    #[must_use]
    pub const fn new(terms: &'static [Term]) -> Self {
        Self { terms, gate: None }
    }

    /// A regression that only applies while `var` is non-zero.
    #[must_use]
    pub const fn gated(var: Var, terms: &'static [Term]) -> Self {
        Self {
            terms,
            gate: Some(var),
        }
    }

    #[must_use]
    pub fn eval(&self, inputs: &Inputs) -> f64 {
        if let Some(var) = self.gate {
            if inputs.get(var) == 0.0 {
                return 0.0;
            }
        }
        self.terms.iter().map(|term| term.eval(inputs)).sum()
    }
}

/// How the derived destination closes the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// `1 - Σ others`, which may become negative.
    Remainder(Destination),
    /// `max(1 - Σ others, 0)`.
    ClampedRemainder(Destination),
}

impl Balance {
    #[must_use]
    pub fn destination(self) -> Destination {
        match self {
            Balance::Remainder(d) | Balance::ClampedRemainder(d) => d,
        }
    }
}

/// Fraction model of one surface or measure type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    pub name: &'static str,
    pub regressions: &'static [(Destination, Regression)],
    pub balance: Balance,
}

impl Model {
    /// Evaluates the model for already validated inputs.
    #[must_use]
    pub fn evaluate(&self, inputs: &Inputs) -> Partition {
        let mut partition = Partition::default();
        for (destination, regression) in self.regressions {
            partition.set(*destination, regression.eval(inputs));
        }

        let derived = self.balance.destination();
        let others: f64 = Destination::ALL
            .into_iter()
            .filter(|d| *d != derived)
            .map(|d| partition.get(d))
            .sum();
        let remainder = 1.0 - others;

        let value = match self.balance {
            Balance::Remainder(_) => remainder,
            Balance::ClampedRemainder(_) if remainder < 0.0 => {
                warn!(
                    model = self.name,
                    destination = derived.symbol(),
                    remainder,
                    "negative remainder clamped to zero"
                );
                0.0
            }
            Balance::ClampedRemainder(_) => remainder,
        };
        partition.set(derived, value);
        partition
    }
}
