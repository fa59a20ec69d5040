use super::*;

#[test]
fn first_report_invokes_callback() {
    let mut probe = SizeProbe::new();
    let mut seen = None;
    assert!(probe.report(Size::new(8.0, 160.0), |s| seen = Some(s)));
    assert_eq!(seen, Some(Size::new(8.0, 160.0)));
    assert_eq!(probe.last(), Some(Size::new(8.0, 160.0)));
}

#[test]
fn unchanged_size_is_not_reported_again() {
    let mut probe = SizeProbe::new();
    let mut calls = 0;
    probe.report(Size::new(1.0, 2.0), |_| calls += 1);
    probe.report(Size::new(1.0, 2.0), |_| calls += 1);
    probe.report(Size::new(1.0, 3.0), |_| calls += 1);
    assert_eq!(calls, 2);
}

#[test]
fn zero_size_still_counts_as_first_measurement() {
    let mut probe = SizeProbe::new();
    let mut calls = 0;
    assert!(probe.report(Size::default(), |_| calls += 1));
    assert_eq!(calls, 1);
}
