use crate::dispatch::tests::utils::{booking, lines, time, uniform_dispatcher};
use crate::fleet::Fleet;
use crate::taxi::TaxiStatus::{Available, Busy};

#[test]
fn test_busy_taxi_is_skipped() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(2), 100);

    let bookings = [
        booking("C1", 1, 3, "09:00"),
        booking("C2", 1, 2, "09:10"),
        booking("C3", 1, 2, "09:15"),
    ];

    assert_eq!(
        vec!["C1 Taxi-1 150 09:20", "C2 Taxi-2 100 09:20", "C3 REJECTED"],
        lines(&mut dispatcher, &bookings)
    );
}

#[test]
fn test_taxi_free_exactly_at_drop_time() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(1), 100);

    let bookings = [booking("C1", 1, 2, "09:00"), booking("C2", 2, 3, "09:10")];

    assert_eq!(
        vec!["C1 Taxi-1 100 09:10", "C2 Taxi-1 100 09:20"],
        lines(&mut dispatcher, &bookings)
    );
}

#[test]
fn test_one_minute_early_is_still_busy() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(1), 100);

    let bookings = [booking("C1", 1, 2, "09:00"), booking("C2", 2, 3, "09:09")];

    assert_eq!(
        vec!["C1 Taxi-1 100 09:10", "C2 REJECTED"],
        lines(&mut dispatcher, &bookings)
    );
    assert_eq!(Busy, dispatcher.fleet().get(1).unwrap().status);
}

#[test]
fn test_freed_taxi_serves_earlier_booking() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(2), 100);

    // bookings are not sorted by time; once freed a taxi stays available
    let bookings = [
        booking("C1", 1, 3, "09:00"),
        booking("C2", 1, 2, "10:00"),
        booking("C3", 3, 4, "09:10"),
    ];

    assert_eq!(
        vec!["C1 Taxi-1 150 09:20", "C2 Taxi-2 100 10:10", "C3 Taxi-1 100 09:20"],
        lines(&mut dispatcher, &bookings)
    );
}

#[test]
fn test_busy_before_midnight_stays_busy_after_it() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(1), 100);

    // 00:10 compares before 23:50, so the taxi is never released
    let bookings = [booking("C1", 1, 2, "23:40"), booking("C2", 2, 2, "00:10")];

    assert_eq!(
        vec!["C1 Taxi-1 100 23:50", "C2 REJECTED"],
        lines(&mut dispatcher, &bookings)
    );
    assert_eq!(time("23:50"), dispatcher.fleet().get(1).unwrap().next_available_time);
}

#[test]
fn test_drop_after_midnight_frees_taxi_late_evening() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(1), 100);

    // the 00:10 drop compares before 23:55 and releases the taxi right away
    let bookings = [booking("C1", 1, 3, "23:50"), booking("C2", 3, 4, "23:55")];

    assert_eq!(
        vec!["C1 Taxi-1 150 00:10", "C2 Taxi-1 100 00:05"],
        lines(&mut dispatcher, &bookings)
    );
}

#[test]
fn test_rejection_still_refreshes_fleet() {
    let mut dispatcher = uniform_dispatcher(Fleet::new(1), 0);

    let bookings = [booking("C1", 1, 2, "09:00"), booking("C2", 5, 5, "12:00")];

    assert_eq!(vec!["C1 Taxi-1 100 09:10", "C2 REJECTED"], lines(&mut dispatcher, &bookings));
    assert_eq!(Available, dispatcher.fleet().get(1).unwrap().status);
}
