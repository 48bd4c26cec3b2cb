//! Regression coefficients of DWA-A102, one [`Model`] per surface or measure.
//!
//! The pond system and drainage elements are not regressions and live with
//! their measures.

use crate::{
    partition::Destination,
    regression::{
        Balance::{ClampedRemainder, Remainder},
        Model, Regression,
        Term::{self, *},
        Var::*,
    },
};

/// Steep roofs (all materials) and flat roofs with smooth cover.
pub const ROOF: Model = Model {
    name: "roof",
    regressions: &[(
        Destination::Runoff,
        Regression::new(&[
            Constant(0.9115),
            Linear(0.00007063, Precipitation),
            Linear(-0.000007498, Evapotranspiration),
            LnOnePlus(-0.2063, StorageHeight),
        ]),
    )],
    balance: Remainder(Destination::Evapotranspiration),
};

/// Flat roofs with rough cover, asphalt, jointless concrete, tight paving.
pub const FLAT_AREA: Model = Model {
    name: "flat area",
    regressions: &[(
        Destination::Runoff,
        Regression::new(&[
            Constant(0.8658),
            Linear(0.0001659, Precipitation),
            Linear(-0.00009945, Evapotranspiration),
            LnOnePlus(-0.1542, StorageHeight),
        ]),
    )],
    balance: Remainder(Destination::Evapotranspiration),
};

pub const GREEN_ROOF: Model = Model {
    name: "green roof",
    regressions: &[(
        Destination::Runoff,
        Regression::new(&[
            Constant(-2.182),
            Ln(0.4293, Precipitation),
            Linear(-0.0001092, Precipitation),
            Inverse(236.1, Evapotranspiration),
            Linear(0.0001142, InstallationHeight),
            Linear(0.0002297, Conductivity),
            Ln(0.01628, WaterCapacity),
            LnProduct(-0.1214, WaterCapacity, InstallationHeight),
        ]),
    )],
    balance: Remainder(Destination::Evapotranspiration),
};

/// Roofs with a storage height above 3 mm.
pub const STORAGE_ROOF: Model = Model {
    name: "storage roof",
    regressions: &[(
        Destination::Runoff,
        Regression::new(&[
            Constant(0.9231),
            Linear(0.000254, Precipitation),
            Linear(-0.0003226, Evapotranspiration),
            LnOnePlus(-0.1472, StorageHeight),
        ]),
    )],
    balance: Remainder(Destination::Evapotranspiration),
};

/// Partially permeable paving with a joint ratio of 2 % to 5 %.
pub const PERMEABLE_NARROW_JOINTS: Model = Model {
    name: "permeable surface (FA 2-5 %)",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Ln(0.0800734, Precipitation),
                Linear(-0.0582828, JointRatio),
                Linear(-0.0501693, StorageHeight),
                Linear(-0.385767, WaterCapacity),
                ShiftedInverse {
                    coef: 8.7040284,
                    shift: 11.9086896,
                    var: Conductivity,
                },
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Constant(0.8529),
                Ln(-0.1248, Precipitation),
                Linear(0.00005057, Evapotranspiration),
                Linear(0.002372, JointRatio),
                LnOnePlus(0.1583, StorageHeight),
            ]),
        ),
    ],
    balance: Remainder(Destination::Recharge),
};

/// Partially permeable paving with a joint ratio of 6 % to 10 %.
pub const PERMEABLE_WIDE_JOINTS: Model = Model {
    name: "permeable surface (FA 6-10 %)",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Ln(0.05912, Precipitation),
                Linear(-0.02749, JointRatio),
                Linear(-0.03671, StorageHeight),
                Linear(-0.30514, WaterCapacity),
                ShiftedInverse {
                    coef: 4.97687,
                    shift: 4.7975,
                    var: Conductivity,
                },
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Constant(0.9012),
                Ln(-0.1325, Precipitation),
                Linear(0.00006661, Evapotranspiration),
                Linear(0.002302, JointRatio),
                LnOnePlus(0.1489, StorageHeight),
            ]),
        ),
    ],
    balance: Remainder(Destination::Recharge),
};

/// Evapotranspiration of porous paving and gravel covers.
const POROUS_EVAPOTRANSPIRATION: &[Term] = &[
    Constant(0.2111),
    Ln(-0.2544, Precipitation),
    Ln(0.2073, Evapotranspiration),
    Linear(0.0006249, StorageHeight),
    Ln(0.123, InstallationHeight),
    Linear(-0.000002806, Conductivity),
];

/// Porous and percolating stones, gravel lawn.
pub const POROUS_SURFACE: Model = Model {
    name: "porous surface",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Linear(0.000001969, Precipitation),
                Ln(-0.005116, StorageHeight),
                Linear(-0.0001051, InstallationHeight),
                ExpInverse {
                    coef: 0.01753,
                    scale: 4.576,
                    var: Conductivity,
                },
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(POROUS_EVAPOTRANSPIRATION),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

/// Lawn grid stones.
pub const PAVER_STONE_GRID: Model = Model {
    name: "paver stone grid",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Constant(0.145704),
                Ln(-0.059177, JointRatio),
                Linear(-0.007354, StorageHeight),
                Ln(-0.050531, WaterCapacity),
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Constant(1.106),
                Ln(-0.1625, Precipitation),
                Linear(0.0001282, Evapotranspiration),
                LnOnePlus(0.1131, StorageHeight),
                Linear(0.2848, WaterCapacity),
            ]),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

/// Unbound gravel covers (water-bound surfaces).
pub const GRAVEL_COVER: Model = Model {
    name: "gravel cover",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Linear(0.00004517, Precipitation),
                Ln(-0.03454, StorageHeight),
                ShiftedInverse {
                    coef: 0.1958,
                    shift: 0.2873,
                    var: Conductivity,
                },
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(POROUS_EVAPOTRANSPIRATION),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

pub const SURFACE_INFILTRATION: Model = Model {
    name: "surface infiltration",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Constant(0.004264),
                Ln(0.001121, Precipitation),
                Ln(-0.002757, AreaShare),
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Constant(0.3999),
                Ln(-0.09317, Precipitation),
                Linear(0.00009746, Evapotranspiration),
                Ln(0.07474, AreaShare),
            ]),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

/// Infiltration swale; the only model deriving runoff.
pub const INFILTRATION_SWALE: Model = Model {
    name: "infiltration swale",
    regressions: &[
        (
            Destination::Recharge,
            Regression::new(&[
                Constant(0.8608),
                Ln(0.02385, Precipitation),
                Linear(-0.00005331, Evapotranspiration),
                Linear(-0.002827, AreaShare),
                Linear(-0.000002493, Conductivity),
                LnRatio(0.0009514, Conductivity, AreaShare),
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Linear(0.000008562, Evapotranspiration),
                PowerOverShifted {
                    coef: 2.611,
                    var: AreaShare,
                    exponent: 0.9425,
                    over: Precipitation,
                    shift: 64.35,
                },
                Linear(-0.000001211, Conductivity),
            ]),
        ),
    ],
    balance: ClampedRemainder(Destination::Runoff),
};

pub const SWALE_TRENCH: Model = Model {
    name: "swale-trench element",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Constant(-0.03867),
                Ln(0.007684, Precipitation),
                Linear(0.000003201, AreaShare),
                Linear(0.0002564, Conductivity),
                Product(-0.0001187, AreaShare, Conductivity),
                LnRatio(0.004161, Conductivity, AreaShare),
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Linear(0.000008879, Evapotranspiration),
                PowerOverShifted {
                    coef: 2.528,
                    var: AreaShare,
                    exponent: 0.9496,
                    over: Precipitation,
                    shift: 81.65,
                },
                Linear(-0.00007768, Conductivity),
            ]),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

pub const SWALE_TRENCH_SYSTEM: Model = Model {
    name: "swale-trench system",
    regressions: &[
        (
            Destination::Runoff,
            Regression::new(&[
                Constant(0.8112),
                Linear(0.0003473, Precipitation),
                Linear(-0.00001845, Evapotranspiration),
                Linear(-0.04793, AreaShare),
                Linear(0.0007481, ThrottledDischarge),
                LnOnePlus(-0.4389, Conductivity),
            ]),
        ),
        (
            Destination::Evapotranspiration,
            Regression::new(&[
                Constant(0.1428),
                Ln(-0.02661, Precipitation),
                Linear(0.00005668, Evapotranspiration),
                Ln(0.0288, AreaShare),
                Linear(-0.0001825, ThrottledDischarge),
                LnOnePlus(-0.01823, Conductivity),
            ]),
        ),
    ],
    balance: ClampedRemainder(Destination::Recharge),
};

/// Rainwater harvesting for irrigation (`v`) and service water (`e`).
pub const RAINWATER_USAGE: Model = Model {
    name: "rainwater usage",
    regressions: &[
        (
            Destination::Evapotranspiration,
            Regression::gated(
                IrrigationVolume,
                &[
                    Linear(-0.0001927, Precipitation),
                    Linear(0.0001831, Evapotranspiration),
                    Linear(0.0006083, IrrigationVolume),
                    Square(-0.0000003127, IrrigationVolume),
                    ExpInverse {
                        coef: -0.3092,
                        scale: 3.269,
                        var: StorageVolume,
                    },
                    ShiftedInverse {
                        coef: 1.424,
                        shift: 2.782,
                        var: ServiceDemand,
                    },
                    Linear(0.0001885, UsableVolume),
                ],
            ),
        ),
        (
            Destination::Consumption,
            Regression::gated(
                ServiceDemand,
                &[
                    Constant(0.4451),
                    Linear(-0.0003529, Precipitation),
                    Linear(-0.00007728, Evapotranspiration),
                    Log10(0.06821, StorageVolume),
                    Linear(-0.0002507, IrrigationVolume),
                    Log10(0.2349, ServiceDemand),
                    Linear(0.0001738, UsableVolume),
                ],
            ),
        ),
    ],
    balance: ClampedRemainder(Destination::Runoff),
};

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::regression::Inputs;

    fn inputs() -> Inputs {
        Inputs::new(800.0, 500.0)
    }

    #[test]
    fn roof_reference_value() {
        let partition = ROOF.evaluate(&inputs().with(StorageHeight, 0.3));
        let a = 0.9115 + 0.00007063 * 800.0 - 0.000007498 * 500.0 - 0.2063 * 1.3_f64.ln();
        assert_relative_eq!(partition.runoff, a, max_relative = 1e-12);
        assert_relative_eq!(partition.runoff, 0.883, epsilon = 5e-4);
        assert_eq!(partition.recharge, 0.0);
        assert_relative_eq!(partition.evapotranspiration, 1.0 - a, max_relative = 1e-12);
    }

    #[test]
    fn green_roof_reference_value() {
        let (p, etp, h, kf, wc) = (800.0_f64, 500.0, 100.0, 70.0, 0.5_f64);
        let partition = GREEN_ROOF.evaluate(
            &inputs()
                .with(InstallationHeight, h)
                .with(Conductivity, kf)
                .with(WaterCapacity, wc),
        );
        let a = -2.182 + 0.4293 * p.ln() - 0.0001092 * p + 236.1 / etp + 0.0001142 * h
            + 0.0002297 * kf
            + 0.01628 * wc.ln()
            - 0.1214 * (wc * h).ln();
        assert_relative_eq!(partition.runoff, a, max_relative = 1e-12);
        assert_relative_eq!(partition.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn swale_derives_runoff() {
        let (p, etp, kf, share) = (800.0_f64, 500.0, 100.0_f64, 10.0_f64);
        let partition = INFILTRATION_SWALE.evaluate(
            &inputs().with(Conductivity, kf).with(AreaShare, share),
        );
        let g = 0.8608 + 0.02385 * p.ln() - 0.00005331 * etp - 0.002827 * share
            - 0.000002493 * kf
            + 0.0009514 * (kf / share).ln();
        let v = 0.000008562 * etp + (2.611 / (p - 64.35)) * share.powf(0.9425)
            - 0.000001211 * kf;
        assert_relative_eq!(partition.recharge, g, max_relative = 1e-12);
        assert_relative_eq!(partition.evapotranspiration, v, max_relative = 1e-12);
        assert_relative_eq!(partition.runoff, (1.0 - (g + v)).max(0.0), epsilon = 1e-12);
    }

    #[test]
    fn rainwater_without_demand_is_pure_runoff() {
        let partition = RAINWATER_USAGE.evaluate(&inputs().with(StorageVolume, 50.0));
        assert_eq!(partition.evapotranspiration, 0.0);
        assert_eq!(partition.consumption, 0.0);
        assert_relative_eq!(partition.runoff, 1.0);
    }

    #[test]
    fn every_regression_model_balances() {
        let models = [
            ROOF,
            FLAT_AREA,
            GREEN_ROOF,
            STORAGE_ROOF,
            PERMEABLE_NARROW_JOINTS,
            PERMEABLE_WIDE_JOINTS,
            POROUS_SURFACE,
            PAVER_STONE_GRID,
            GRAVEL_COVER,
            SURFACE_INFILTRATION,
            INFILTRATION_SWALE,
            SWALE_TRENCH,
            SWALE_TRENCH_SYSTEM,
            RAINWATER_USAGE,
        ];
        let inputs = inputs()
            .with(StorageHeight, 1.0)
            .with(InstallationHeight, 80.0)
            .with(Conductivity, 20.0)
            .with(WaterCapacity, 0.15)
            .with(JointRatio, 8.0)
            .with(AreaShare, 10.0)
            .with(ThrottledDischarge, 5.0)
            .with(StorageVolume, 50.0)
            .with(ServiceDemand, 2.0)
            .with(IrrigationVolume, 120.0)
            .with(UsableVolume, 800.0);

        for model in models {
            let partition = model.evaluate(&inputs);
            let derived = model.balance.destination();
            let remainder = 1.0
                - Destination::ALL
                    .into_iter()
                    .filter(|d| *d != derived)
                    .map(|d| partition.get(d))
                    .sum::<f64>();
            let expected = match model.balance {
                Remainder(_) => remainder,
                ClampedRemainder(_) => remainder.max(0.0),
            };
            assert_relative_eq!(partition.get(derived), expected, epsilon = 1e-12);
            assert_relative_eq!(
                partition.sum(),
                1.0 + (expected - remainder),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn clamped_models_stop_at_zero() {
        let swale = INFILTRATION_SWALE.evaluate(
            &Inputs::new(500.0, 450.0)
                .with(Conductivity, 14.0)
                .with(AreaShare, 42.323 * 14.0_f64.powf(-0.314)),
        );
        assert_eq!(swale.runoff, 0.0);
        assert!(swale.recharge + swale.evapotranspiration > 1.0);
        assert_relative_eq!(swale.sum(), 1.02998, epsilon = 1e-4);

        let share = 11.79 - 3.14 * 10.0_f64.ln() - 0.18594 * 0.36;
        let system = SWALE_TRENCH_SYSTEM.evaluate(
            &Inputs::new(1700.0, 450.0)
                .with(Conductivity, 0.36)
                .with(ThrottledDischarge, 10.0)
                .with(AreaShare, share),
        );
        assert_eq!(system.recharge, 0.0);
        assert_relative_eq!(system.sum(), 1.0567, epsilon = 1e-4);
    }
}
