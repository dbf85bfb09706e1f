use super::*;

#[test]
fn branding_for_known_tenant() {
    let brand = branding_for("ocean-breeze").unwrap();
    assert_eq!(brand.display_name, "Ocean Breeze Villas");
    assert_eq!(brand.primary_color, "#0277BD");
}

#[test]
fn branding_for_unknown_tenant_is_none() {
    assert!(branding_for("client-9").is_none());
    assert!(branding_for("").is_none());
}

#[test]
fn tenant_ids_are_unique() {
    for (i, a) in HOTEL_TENANTS.iter().enumerate() {
        for b in &HOTEL_TENANTS[i + 1..] {
            assert_ne!(a.tenant_id, b.tenant_id);
        }
    }
}

#[test]
fn tenant_for_email_maps_known_domains() {
    assert_eq!(tenant_for_email("a@sunshine-hotels.com"), "sunshine-hotels");
    assert_eq!(tenant_for_email("a@MountainView.com"), "mountain-view");
    assert_eq!(tenant_for_email("a@oceanbreeze.com"), "ocean-breeze");
}

#[test]
fn tenant_for_email_defaults_to_sunshine() {
    assert_eq!(tenant_for_email("a@gmail.com"), DEFAULT_TENANT_ID);
    assert_eq!(tenant_for_email("no-at-sign"), DEFAULT_TENANT_ID);
    assert!(branding_for(DEFAULT_TENANT_ID).is_some());
}
