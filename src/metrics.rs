use std::sync::LazyLock;

use prometheus::*;

static METRIC_QUERY_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!("im_query_count", "count of the catalog queries", &["operation", "filter"])
        .unwrap()
});

static METRIC_QUERY_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "im_query_duration",
        "duration of the per-query resolution in seconds",
        &["operation", "filter"]
    )
    .unwrap()
});

static METRIC_QUERY_RESULT_SIZE: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "im_query_result_size",
        "number of images returned by a query",
        &["operation", "filter"],
        exponential_buckets(1., 4., 8).unwrap()
    )
    .unwrap()
});

/// 记录一次查询
pub fn observe_query(operation: &str, filter: &str, duration: f32, result_size: usize) {
    let labels = [operation, filter];
    METRIC_QUERY_COUNT.with_label_values(&labels).inc();
    METRIC_QUERY_DURATION.with_label_values(&labels).observe(duration as f64);
    METRIC_QUERY_RESULT_SIZE.with_label_values(&labels).observe(result_size as f64);
}
