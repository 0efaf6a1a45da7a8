use super::*;

#[test]
fn test_canonical_strips_from_last_marker() {
    assert_eq!(canonical_locus("BRCA1_ex2_LHS_01").unwrap(), "BRCA1_ex2_");
    assert_eq!(canonical_locus("BRCA1_ex2_RHS").unwrap(), "BRCA1_ex2_");
    assert_eq!(canonical_locus("locLHSx_RHS_2").unwrap(), "locLHSx_");
    assert_eq!(canonical_locus("RHS-only").unwrap(), "");
}

#[test]
fn test_canonical_is_idempotent_without_markers_in_output() {
    let name = "TP53_e5_LHS_a";
    let once = canonical_locus(name).unwrap();
    let again = format!("{once}LHS");
    assert_eq!(canonical_locus(&again).unwrap(), once);
    assert_eq!(
        canonical_locus_with(once, UnmarkedProbePolicy::WholeName).unwrap(),
        once
    );
}

#[test]
fn test_canonical_without_marker() {
    assert_eq!(
        canonical_locus("TP53_e5").unwrap_err(),
        ParseError::UnmarkedProbe("TP53_e5".to_string())
    );
    assert!(canonical_locus_with("TP53_e5", UnmarkedProbePolicy::Error).is_err());
    assert_eq!(
        canonical_locus_with("TP53_e5", UnmarkedProbePolicy::WholeName).unwrap(),
        "TP53_e5"
    );
}

#[test]
fn test_is_removed_uses_exact_membership() {
    let set: RemovalSet = ["locA_", "locB"].into_iter().collect();
    let policy = UnmarkedProbePolicy::Error;
    assert!(is_removed("locA_LHS", &set, policy).unwrap());
    assert!(is_removed("locA_RHS_3", &set, policy).unwrap());
    assert!(!is_removed("locA_x_LHS", &set, policy).unwrap());
    assert!(!is_removed("locBLHS", &set, policy).is_err());
    assert!(is_removed("locBLHS", &set, policy).unwrap());
    assert!(!is_removed("LOCA_LHS", &set, policy).unwrap());
    assert!(is_removed("locB", &set, policy).is_err());
    assert!(is_removed("locB", &set, UnmarkedProbePolicy::WholeName).unwrap());
}

#[test]
fn test_policy_deserializes_kebab_case() {
    let whole: UnmarkedProbePolicy = serde_json::from_str("\"whole-name\"").unwrap();
    assert_eq!(whole, UnmarkedProbePolicy::WholeName);
    let error: UnmarkedProbePolicy = serde_json::from_str("\"error\"").unwrap();
    assert_eq!(error, UnmarkedProbePolicy::Error);
}
