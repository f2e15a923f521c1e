//! Shapes raw per-room statistics into chart datasets.
//!
//! All functions are pure and total: degenerate input (empty, every `rooms`
//! null, zero totals) yields empty datasets or zero values, never NaN.

use super::stats::{CategoryKey, CategoryPoint, ChartDataset, StatRecord, dataset_total};

/// Room counts above this are folded into a single trailing bar.
pub const MANY_ROOMS_THRESHOLD: i64 = 5;

pub const MANY_ROOMS_LABEL: &str = "5+ rooms";

/// Share of properties per room count, in percent of the displayed total.
pub fn to_percentage_distribution(records: &[StatRecord]) -> ChartDataset {
    let counted: Vec<(i64, u64)> = records
        .iter()
        .filter_map(|r| Some((r.rooms?, r.property_count?)))
        .collect();

    let total: f64 = counted.iter().map(|(_, count)| *count as f64).sum();

    counted
        .into_iter()
        .map(|(rooms, count)| {
            let value = if total > 0.0 {
                count as f64 / total * 100.0
            } else {
                0.0
            };
            CategoryPoint::new(rooms, value)
        })
        .collect()
}

/// Running weighted mean used for both the per-room bars and the tail bucket.
#[derive(Debug, Default, Clone, Copy)]
struct WeightedMean {
    weighted_sum: f64,
    weight: f64,
    plain_sum: f64,
    samples: u32,
}

impl WeightedMean {
    fn add(&mut self, value: f64, weight: u64) {
        self.weighted_sum += value * weight as f64;
        self.weight += weight as f64;
        self.plain_sum += value;
        self.samples += 1;
    }

    /// Weighted mean, falling back to the plain mean when every weight is zero.
    fn mean(&self) -> f64 {
        if self.weight > 0.0 {
            self.weighted_sum / self.weight
        } else if self.samples > 0 {
            self.plain_sum / f64::from(self.samples)
        } else {
            0.0
        }
    }

    /// Strictly weighted mean; zero when no weight was accumulated.
    fn weighted_mean(&self) -> f64 {
        if self.weight > 0.0 {
            self.weighted_sum / self.weight
        } else {
            0.0
        }
    }
}

/// Average price per room count, with every listing above five rooms folded
/// into a trailing `"5+ rooms"` bar weighted by property count.
///
/// Records above five rooms missing a price or a count are dropped and never
/// create the trailing bar on their own.
pub fn to_average_price_by_room(records: &[StatRecord]) -> ChartDataset {
    let mut per_room: Vec<(i64, WeightedMean)> = Vec::new();
    let mut many_rooms: Option<WeightedMean> = None;

    for record in records {
        let Some(rooms) = record.rooms else {
            continue;
        };

        if rooms > MANY_ROOMS_THRESHOLD {
            if let (Some(price), Some(count)) = (record.average_price, record.property_count) {
                many_rooms
                    .get_or_insert_with(WeightedMean::default)
                    .add(price, count);
            }
            continue;
        }

        let Some(price) = record.average_price else {
            continue;
        };
        let weight = record.property_count.unwrap_or(0);

        match per_room.iter_mut().find(|(r, _)| *r == rooms) {
            Some((_, mean)) => mean.add(price, weight),
            None => {
                let mut mean = WeightedMean::default();
                mean.add(price, weight);
                per_room.push((rooms, mean));
            }
        }
    }

    let mut dataset: ChartDataset = per_room
        .into_iter()
        .map(|(rooms, mean)| CategoryPoint::new(format!("{rooms} rooms"), mean.mean()))
        .collect();

    if let Some(bucket) = many_rooms {
        dataset.push(CategoryPoint::new(MANY_ROOMS_LABEL, bucket.weighted_mean()));
    }

    dataset
}

/// Merges every category below `threshold_percent` of the total into one
/// trailing `other_label` category.
///
/// The result is sorted by value descending, ties kept in input order. The
/// sum of values is preserved.
pub fn bucket_tiny_categories(
    data: &[CategoryPoint],
    threshold_percent: f64,
    other_label: &str,
) -> ChartDataset {
    let mut sorted: Vec<(usize, &CategoryPoint)> = data.iter().enumerate().collect();
    sorted.sort_by(|(ia, a), (ib, b)| b.value.total_cmp(&a.value).then(ia.cmp(ib)));

    let total = dataset_total(data);
    if total <= 0.0 {
        return sorted.into_iter().map(|(_, p)| p.clone()).collect();
    }

    let mut visible = Vec::with_capacity(sorted.len());
    let mut other_value = 0.0;
    let mut bucketed = 0usize;

    for (_, point) in sorted {
        if point.value / total * 100.0 < threshold_percent {
            other_value += point.value;
            bucketed += 1;
        } else {
            visible.push(point.clone());
        }
    }

    if bucketed > 0 {
        visible.push(CategoryPoint {
            key: CategoryKey::from(other_label),
            value: other_value,
        });
    }

    visible
}
