use super::{
    clean_water, format_number, kilometers_to_miles, round_half_up, round_to_decimals, round_whole,
};

#[test]
fn test_kilometers_to_miles() {
    assert!((kilometers_to_miles(100.0) - 62.1371).abs() < 1e-9);
    assert!(kilometers_to_miles(0.0).abs() < f64::EPSILON);
}

#[test]
fn test_format_number_groups_thousands() {
    assert_eq!(format_number(1_234_567.0), "1,234,567");
    assert_eq!(format_number(27_612.49), "27,612");
    assert_eq!(format_number(999.5), "1,000");
    assert_eq!(format_number(412.0), "412");
    assert_eq!(format_number(0.2), "0");
    assert_eq!(format_number(-1234.0), "-1,234");
    assert_eq!(format_number(-0.3), "0");
    assert_eq!(format_number(-2.5), "-2");
}

#[test]
fn test_rounding_conventions() {
    assert_eq!(round_whole(41.5), 42);
    assert_eq!(round_whole(-41.5), -41);
    assert_eq!(round_whole(-41.6), -42);
    assert_eq!(round_whole(-0.4), 0);
    assert!((round_half_up(2.25, 1) - 2.3).abs() < 1e-12);
    assert!((round_half_up(-2.25, 1) - -2.2).abs() < 1e-12);
    assert!((round_to_decimals(-2.25, 1) - -2.3).abs() < 1e-12);
    assert!(round_half_up(-0.0004, 3).is_sign_positive());
    assert!((round_to_decimals(-4.123_56, 3) - -4.124).abs() < 1e-12);
    assert!((round_to_decimals(12.349, 1) - 12.3).abs() < 1e-12);
    let zero = round_to_decimals(-0.04, 1);
    assert!(zero.is_sign_positive());
    assert_eq!(format!("{zero:.1}"), "0.0");
}

#[test]
fn test_clean_water_table() {
    assert_eq!(clean_water("NORTH ATLANTIC OCEAN"), "North Atlantic Ocean");
    assert_eq!(clean_water("NORTH PACIFIC OCEAN"), "North Pacific Ocean");
    assert_eq!(clean_water("PACIFIC OCEAN"), "Pacific Ocean");
    assert_eq!(clean_water("SOUTH ATLANTIC OCEAN"), "South Atlantic Ocean");
    assert_eq!(clean_water("Caribbean  Sea"), "Caribbean Sea");
    assert_eq!(clean_water("Tasman  Sea"), "Tasman Sea");
}

#[test]
fn test_clean_water_passes_unlisted_names() {
    assert_eq!(clean_water("Gulf of Mexico"), "Gulf of Mexico");
    assert_eq!(clean_water("Mediterranean Sea"), "Mediterranean Sea");
    assert_eq!(clean_water(""), "");
}
