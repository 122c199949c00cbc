use streampulse::{RollingWindow, Trend};

#[test]
fn test_window_holds_exactly_last_c_records_in_order() {
    let capacity = 4;
    let mut window = RollingWindow::new(capacity);

    // C + k records; only the last C survive, in arrival order
    for sample in 1..=10 {
        window.push(sample as f64);
        assert!(window.len() <= capacity);
    }

    assert_eq!(window.len(), capacity);
    assert_eq!(
        window.iter().collect::<Vec<_>>(),
        vec![7.0, 8.0, 9.0, 10.0]
    );
}

#[test]
fn test_mean_of_partial_window() {
    let mut window = RollingWindow::new(10);
    for sample in [2.0, 4.0, 6.0] {
        window.push(sample);
    }
    assert_eq!(window.mean(), Some(4.0));
}

#[test]
fn test_mean_after_eviction_uses_retained_samples_only() {
    let mut window = RollingWindow::new(3);
    for sample in [100.0, 1.0, 2.0, 3.0] {
        window.push(sample);
    }
    // 100.0 was evicted; mean covers [1, 2, 3]
    assert_eq!(window.mean(), Some(2.0));
}

#[test]
fn test_empty_window_has_no_mean() {
    let window = RollingWindow::new(5);
    assert!(window.is_empty());
    assert_eq!(window.mean(), None);
    assert_eq!(window.trend(2), Trend::Unknown);
}

#[test]
fn test_identical_values_report_stable() {
    let mut window = RollingWindow::new(5);
    for _ in 0..5 {
        window.push(42.0);
    }
    assert_eq!(window.trend(2), Trend::Stable);
}

#[test]
fn test_rising_and_falling_trends() {
    let mut window = RollingWindow::new(5);
    for sample in [60.0, 62.0, 64.0, 66.0, 68.0] {
        window.push(sample);
    }
    assert_eq!(window.trend(2), Trend::Increasing);

    let mut window = RollingWindow::new(5);
    for sample in [68.0, 66.0, 64.0, 62.0, 60.0] {
        window.push(sample);
    }
    assert_eq!(window.trend(2), Trend::Decreasing);
}

#[test]
fn test_trend_respects_min_samples() {
    let mut window = RollingWindow::new(10);
    window.push(1.0);
    window.push(2.0);
    window.push(3.0);

    assert_eq!(window.trend(4), Trend::Unknown);
    assert_eq!(window.trend(3), Trend::Increasing);
}
