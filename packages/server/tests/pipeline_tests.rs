//! Behavioural tests for the job query pipeline.

mod common;

use job_board_core::domains::jobs::pipeline::{
    filter_and_sort, JobAnalytics, JobCriteria, SortKey,
};
use job_board_core::domains::jobs::{JobData, SalaryValue};

use crate::common::{days_ago, job_data, today};

fn ids(jobs: &[JobData]) -> Vec<i64> {
    jobs.iter().map(|job| job.id.into_i64()).collect()
}

/// A mixed board: duplicate dates, duplicate salaries, text and invalid
/// salaries, repeated locations.
fn board() -> Vec<JobData> {
    vec![
        job_data(1, "cook", "Downtown", Some(SalaryValue::Number(16.5)), days_ago(3)),
        job_data(2, "Cashier", "Mall", Some(SalaryValue::from("15")), days_ago(0)),
        job_data(3, "Barista", "Downtown", Some(SalaryValue::from("abc")), days_ago(3)),
        job_data(4, "Cook", "Uptown", Some(SalaryValue::Number(16.5)), days_ago(10)),
        job_data(5, "Driver", "Mall", None, days_ago(0)),
        job_data(6, "Manager", "Uptown", Some(SalaryValue::Number(22.0)), days_ago(40)),
        job_data(7, "Stocker", "Downtown", Some(SalaryValue::Number(-3.0)), days_ago(1)),
    ]
}

// =============================================================================
// Filter and sort
// =============================================================================

#[test]
fn no_criteria_returns_every_job_newest_first() {
    let jobs = board();

    let result = filter_and_sort(&jobs, &JobCriteria::default());

    assert_eq!(result.len(), jobs.len());
    assert!(result
        .windows(2)
        .all(|pair| pair[0].posted_date >= pair[1].posted_date));
    // Equal dates keep input order
    assert_eq!(ids(&result), vec![2, 5, 7, 1, 3, 4, 6]);
}

#[test]
fn filtering_is_idempotent() {
    let jobs = board();
    let criteria = JobCriteria::default()
        .with_search("o")
        .with_salary_min("10")
        .sorted_by(SortKey::SalaryLow);

    let once = filter_and_sort(&jobs, &criteria);
    let twice = filter_and_sort(&once, &criteria);

    assert_eq!(once, twice);
}

#[test]
fn salary_sort_is_stable_for_equal_salaries() {
    let jobs = board();

    let high = filter_and_sort(&jobs, &JobCriteria::default().sorted_by(SortKey::SalaryHigh));
    let low = filter_and_sort(&jobs, &JobCriteria::default().sorted_by(SortKey::SalaryLow));

    // 16.5 twice: job 1 stays ahead of job 4 in both directions.
    // "abc" and missing salaries trail, in input order.
    assert_eq!(ids(&high), vec![6, 1, 4, 2, 7, 3, 5]);
    assert_eq!(ids(&low), vec![7, 2, 1, 4, 6, 3, 5]);
}

#[test]
fn inverted_salary_range_matches_nothing() {
    let criteria = JobCriteria::default()
        .with_salary_min("20")
        .with_salary_max("10");

    assert!(filter_and_sort(&board(), &criteria).is_empty());
}

#[test]
fn criteria_are_conjunctive() {
    let criteria = JobCriteria::default()
        .with_search("COOK")
        .with_location("Uptown");

    assert_eq!(ids(&filter_and_sort(&board(), &criteria)), vec![4]);
}

#[test]
fn salary_high_orders_the_two_job_example() {
    let jobs = vec![
        job_data(1, "A job", "A", Some(SalaryValue::Number(15.0)), today()),
        job_data(2, "B job", "B", Some(SalaryValue::Number(20.0)), today()),
    ];

    let sorted = filter_and_sort(&jobs, &JobCriteria::default().sorted_by(SortKey::SalaryHigh));
    assert_eq!(ids(&sorted), vec![2, 1]);

    let bounded = filter_and_sort(&jobs, &JobCriteria::default().with_salary_min("18"));
    assert_eq!(ids(&bounded), vec![2]);
}

#[test]
fn search_matches_title_ignoring_case() {
    let jobs = vec![job_data(1, "Cook", "A", None, today())];

    let result = filter_and_sort(&jobs, &JobCriteria::default().with_search("cook"));

    assert_eq!(ids(&result), vec![1]);
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn distribution_covers_exactly_the_valid_salaries() {
    let analytics = JobAnalytics::compute(&board(), today());

    // 16.5, 15, 16.5, 22 are valid; "abc", missing and -3 are not.
    assert_eq!(analytics.total_jobs, 7);
    assert_eq!(analytics.valid_salary_jobs, 4);
    assert_eq!(analytics.salary_distribution.total(), 4);
    assert_eq!(analytics.average_salary, 17.5);
}

#[test]
fn average_ignores_unparsable_salaries() {
    let jobs = vec![
        job_data(1, "A", "X", Some(SalaryValue::from("abc")), today()),
        job_data(2, "B", "X", Some(SalaryValue::Number(16.0)), today()),
    ];

    let analytics = JobAnalytics::compute(&jobs, today());

    assert_eq!(analytics.total_jobs, 2);
    assert_eq!(analytics.average_salary, 16.0);
}

#[test]
fn average_is_zero_without_valid_salaries() {
    let jobs = vec![
        job_data(1, "A", "X", None, today()),
        job_data(2, "B", "Y", Some(SalaryValue::from("n/a")), today()),
    ];

    let analytics = JobAnalytics::compute(&jobs, today());

    assert_eq!(analytics.average_salary, 0.0);
    assert!(analytics.average_salary_by_location.is_empty());
    assert_eq!(analytics.job_count_by_location.len(), 2);
}

#[test]
fn trend_always_spans_thirty_days() {
    for jobs in [Vec::new(), board()] {
        let analytics = JobAnalytics::compute(&jobs, today());

        assert_eq!(analytics.postings_by_day.len(), 30);
        assert_eq!(analytics.postings_by_day[29].date, today());
        assert_eq!(analytics.postings_by_day[0].date, days_ago(29));
    }
}

#[test]
fn trend_and_week_count_follow_the_reference_date() {
    let analytics = JobAnalytics::compute(&board(), today());

    let counted: usize = analytics.postings_by_day.iter().map(|d| d.count).sum();
    // Job 6 is 40 days old and falls outside the window.
    assert_eq!(counted, 6);
    // Job 4 is 10 days old.
    assert_eq!(analytics.posted_this_week, 5);
}

#[test]
fn location_averages_are_highest_first() {
    let analytics = JobAnalytics::compute(&board(), today());

    let order: Vec<&str> = analytics
        .average_salary_by_location
        .iter()
        .map(|entry| entry.location.as_str())
        .collect();
    // Uptown (16.5, 22) = 19.25, Downtown (16.5) = 16.5, Mall (15) = 15
    assert_eq!(order, vec!["Uptown", "Downtown", "Mall"]);
    assert_eq!(analytics.average_salary_by_location[0].average, 19.25);
}
