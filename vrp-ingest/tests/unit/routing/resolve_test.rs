use super::*;

fn create_config(router: RouterKind) -> Config {
    Config { router, ..Config::default() }
}

#[test]
fn can_resolve_osrm_router_for_known_profile() {
    let router = resolve_router(&create_config(RouterKind::Osrm), "car").unwrap();

    assert_eq!(router.profile(), "car");
}

#[test]
fn can_detect_unknown_profile() {
    assert_eq!(
        resolve_router(&create_config(RouterKind::Ors), "truck").unwrap_err(),
        Error::input("Invalid profile: truck.")
    );
}

#[cfg(not(feature = "embedded-router"))]
#[test]
fn embedded_engine_requires_build_feature() {
    let error = resolve_router(&create_config(RouterKind::Embedded), "car").unwrap_err();

    assert_eq!(error.kind, crate::ErrorKind::Routing);
    assert!(error.message.contains("embedded-router"));
}

#[cfg(feature = "embedded-router")]
#[test]
fn can_resolve_embedded_engine() {
    assert_eq!(resolve_router(&create_config(RouterKind::Embedded), "car").unwrap().profile(), "car");
}

#[cfg(feature = "embedded-router")]
#[test]
fn embedded_engine_rejects_unknown_profile() {
    assert_eq!(
        resolve_router(&create_config(RouterKind::Embedded), "hovercraft").unwrap_err(),
        Error::routing("Invalid profile: hovercraft")
    );
}

#[test]
fn can_convert_durations_to_matrix() {
    let matrix = durations_to_matrix(&[vec![0., 10.4], vec![10.6, 0.]], 2).unwrap();

    assert_eq!(matrix.get(0, 1), 10);
    assert_eq!(matrix.get(1, 0), 11);
}

#[test]
fn can_detect_malformed_durations() {
    assert!(durations_to_matrix(&[vec![0.]], 2).is_err());
    assert!(durations_to_matrix(&[vec![0., 1.], vec![0.]], 2).is_err());
}
