use approx::assert_relative_eq;
use integration_tests::Site;
use uom::si::{area::square_meter, volume::cubic_meter};
use watbal_balance::{DrainageType, SystemTotal};

const SITE_TOML: &str = r#"
drainage = "pipe"

[study]
precipitation = 800.0
evapotranspiration = 500.0

[[roofs]]
area = 1000.0

[[roofs]]
area = 250.0
storage_height = 0.6

[[green_roofs]]
area = 400.0
installation_height = 100.0

[[yards]]
area = 300.0
joint_ratio = 8.0

[swale]
conductivity = 100.0
"#;

#[test]
fn toml_site_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let site: Site = toml::from_str(SITE_TOML)?;

    assert_eq!(site.roofs.len(), 2);
    assert_eq!(site.roofs[0].design.storage_height, 0.3);
    assert_eq!(site.roofs[1].design.storage_height, 0.6);
    assert_eq!(site.green_roofs[0].design.conductivity, 70.0);
    assert_eq!(site.yards[0].design.conductivity(), 36.0);
    assert_eq!(site.drainage, Some(DrainageType::Pipe));
    assert!(site.swale.is_some_and(|swale| swale.area_share.is_none()));

    let stages = site.stages()?;
    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].len(), 6);
    assert_eq!(stages[0].outlet().label(), "Infiltration swale");

    let total = SystemTotal::from_stages(&stages)?;
    let surfaces: f64 = [1000.0, 250.0, 400.0, 300.0].iter().sum();
    assert!(total.area().get::<square_meter>() > surfaces);
    assert!(total.volumes().precipitation.get::<cubic_meter>() > surfaces * 0.8);
    Ok(())
}

#[test]
fn json_site_without_measures() -> Result<(), Box<dyn std::error::Error>> {
    let site: Site = serde_json::from_str(
        r#"{
            "study": { "precipitation": 700.0, "evapotranspiration": 550.0 },
            "roofs": [ { "area": 120.0 } ],
            "yards": [ { "area": 80.0, "joint_ratio": 4.0, "conductivity": 20.0 } ]
        }"#,
    )?;

    let stages = site.stages()?;
    assert_eq!(stages.len(), 2);

    let total = SystemTotal::from_stages(&stages)?;
    assert_relative_eq!(
        total.volumes().precipitation.get::<cubic_meter>(),
        200.0 * 0.7,
        max_relative = 1e-9
    );
    Ok(())
}

#[test]
fn invalid_climate_is_rejected_while_loading() {
    let result = toml::from_str::<Site>(
        r#"
        [study]
        precipitation = 2000.0
        evapotranspiration = 500.0
        "#,
    );
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Precipitation (P) = 2000"), "{message}");
}

#[test]
fn invalid_design_is_rejected_while_computing() {
    let site: Site = serde_json::from_str(
        r#"{
            "study": { "precipitation": 800.0, "evapotranspiration": 500.0 },
            "green_roofs": [ { "area": 50.0, "installation_height": 20.0 } ]
        }"#,
    )
    .unwrap();
    assert!(site.stages().is_err());
}
