#[cfg(test)]
mod tests {
    use rent_dashboard::charts::bar::{BarChartConfig, BarChartModel};
    use rent_dashboard::charts::pie::{PieChartConfig, PieChartModel};
    use rent_dashboard::charts::{HoverState, Margin, MarginOverrides};
    use rent_dashboard::hooks::use_fetch::FetchState;
    use rent_dashboard::models::{
        aggregate::{bucket_tiny_categories, to_average_price_by_room, to_percentage_distribution},
        error::AppError,
        property::Property,
        stats::{CategoryKey, CategoryPoint, StatRecord, dataset_total},
    };
    use std::rc::Rc;

    // Helper function to build a complete record
    fn record(rooms: i64, count: u64, price: f64) -> StatRecord {
        StatRecord::new(Some(rooms), Some(count), Some(price))
    }

    // Helper function mirroring a typical API response
    fn create_api_records() -> Vec<StatRecord> {
        vec![
            record(1, 120, 450.0),
            record(2, 340, 620.0),
            record(3, 280, 810.0),
            record(4, 90, 1_100.0),
            record(5, 25, 1_450.0),
            record(6, 8, 1_900.0),
            record(8, 2, 3_200.0),
            StatRecord::new(None, Some(14), Some(700.0)),
        ]
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_parse_display() {
        let error = AppError::ParseError("expected value".to_string());
        assert_eq!(error.to_string(), "Parse error: expected value");
    }

    // ===== StatRecord Tests =====

    #[test]
    fn test_stat_record_deserialization() {
        let json = r#"[
            {"rooms": 1, "property_count": 10, "average_price": 1000.5},
            {"rooms": null, "property_count": 5, "average_price": null}
        ]"#;

        let records: Vec<StatRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record(1, 10, 1000.5));
        assert_eq!(records[1].rooms, None);
        assert_eq!(records[1].average_price, None);
    }

    // ===== Percentage Distribution Tests =====

    #[test]
    fn test_percentage_distribution_scenario() {
        let records = vec![
            record(1, 10, 1000.0),
            record(2, 30, 1500.0),
            StatRecord::new(None, Some(5), Some(900.0)),
        ];

        let data = to_percentage_distribution(&records);
        assert_eq!(
            data,
            vec![CategoryPoint::new(1, 25.0), CategoryPoint::new(2, 75.0)]
        );
    }

    #[test]
    fn test_percentage_distribution_sums_to_hundred() {
        let data = to_percentage_distribution(&create_api_records());

        assert_eq!(data.len(), 7);
        assert!((dataset_total(&data) - 100.0).abs() < 1e-9);
        assert!(data.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_percentage_distribution_degenerate_inputs() {
        assert!(to_percentage_distribution(&[]).is_empty());

        let all_null = vec![StatRecord::new(None, Some(3), Some(1.0))];
        assert!(to_percentage_distribution(&all_null).is_empty());

        let zero = vec![record(1, 0, 100.0), record(2, 0, 200.0)];
        assert_eq!(dataset_total(&to_percentage_distribution(&zero)), 0.0);
    }

    // ===== Average Price Tests =====

    #[test]
    fn test_average_price_scenario() {
        let records = vec![
            record(1, 10, 100.0),
            record(2, 10, 200.0),
            record(6, 5, 1000.0),
            record(7, 5, 2000.0),
        ];

        let data = to_average_price_by_room(&records);
        assert_eq!(
            data,
            vec![
                CategoryPoint::new("1 rooms", 100.0),
                CategoryPoint::new("2 rooms", 200.0),
                CategoryPoint::new("5+ rooms", 1500.0),
            ]
        );
    }

    #[test]
    fn test_many_rooms_entry_only_when_present() {
        let small: Vec<StatRecord> = (1..=5).map(|r| record(r, 10, 100.0 * r as f64)).collect();
        let data = to_average_price_by_room(&small);
        assert_eq!(data.len(), 5);
        assert!(!data.iter().any(|p| p.key == CategoryKey::from("5+ rooms")));

        let data = to_average_price_by_room(&create_api_records());
        let last = data.last().unwrap();
        assert_eq!(last.key, CategoryKey::from("5+ rooms"));
        assert_close(last.value, (1_900.0 * 8.0 + 3_200.0 * 2.0) / 10.0);
    }

    #[test]
    fn test_many_rooms_entry_needs_complete_record() {
        let records = vec![
            record(1, 10, 100.0),
            StatRecord::new(Some(7), Some(3), None),
        ];

        let data = to_average_price_by_room(&records);
        assert_eq!(data, vec![CategoryPoint::new("1 rooms", 100.0)]);
    }

    #[test]
    fn test_average_price_skips_missing_price() {
        let records = vec![
            StatRecord::new(Some(1), Some(4), None),
            record(2, 4, 300.0),
        ];

        let data = to_average_price_by_room(&records);
        assert_eq!(data, vec![CategoryPoint::new("2 rooms", 300.0)]);
    }

    // ===== Bucketing Tests =====

    #[test]
    fn test_bucket_scenario() {
        let data = vec![
            CategoryPoint::new("A", 90.0),
            CategoryPoint::new("B", 4.0),
            CategoryPoint::new("C", 3.0),
            CategoryPoint::new("D", 3.0),
        ];

        assert_eq!(
            bucket_tiny_categories(&data, 5.0, "Other"),
            vec![CategoryPoint::new("A", 90.0), CategoryPoint::new("Other", 10.0)]
        );
    }

    #[test]
    fn test_bucket_conserves_total() {
        let data = to_percentage_distribution(&create_api_records());
        let total = dataset_total(&data);

        for threshold in [0.0, 1.0, 5.0, 12.5, 50.0, 100.0, 150.0] {
            let bucketed = bucket_tiny_categories(&data, threshold, "Other");
            assert!(
                (dataset_total(&bucketed) - total).abs() < 1e-9,
                "total changed at threshold {threshold}"
            );
        }
    }

    #[test]
    fn test_bucket_without_tiny_categories() {
        let data = vec![
            CategoryPoint::new("A", 40.0),
            CategoryPoint::new("B", 60.0),
        ];

        let bucketed = bucket_tiny_categories(&data, 5.0, "Other");
        assert_eq!(
            bucketed,
            vec![CategoryPoint::new("B", 60.0), CategoryPoint::new("A", 40.0)]
        );
        assert!(!bucketed.iter().any(|p| p.key == CategoryKey::from("Other")));
    }

    #[test]
    fn test_bucket_custom_label() {
        let data = vec![
            CategoryPoint::new("A", 99.0),
            CategoryPoint::new("B", 1.0),
        ];

        let bucketed = bucket_tiny_categories(&data, 5.0, "Rest");
        assert_eq!(bucketed[1], CategoryPoint::new("Rest", 1.0));
    }

    // ===== Bar Chart Tests =====

    #[test]
    fn test_bar_chart_hover_round_trip() {
        let data = to_percentage_distribution(&create_api_records());
        let model = BarChartModel::build(&data, &BarChartConfig::new(500.0, 300.0)).unwrap();

        let mut hover = HoverState::default();
        let fills: Vec<String> = (0..model.bars.len())
            .map(|i| model.bar_fill(i, &hover).to_string())
            .collect();

        for i in 0..model.bars.len() {
            hover.enter(i);
            assert_eq!(model.bar_fill(i, &hover), "orange");
            assert!(model.ruler(&hover).is_some());

            hover.leave();
            assert_eq!(model.bar_fill(i, &hover), fills[i]);
            assert!(model.ruler(&hover).is_none());
        }
    }

    #[test]
    fn test_bar_chart_margin_override() {
        let mut config = BarChartConfig::new(600.0, 400.0);
        config.margin = MarginOverrides {
            bottom: Some(100.0),
            ..MarginOverrides::default()
        }
        .resolve(Margin::proportional(600.0, 400.0));

        let data = vec![CategoryPoint::new("1 rooms", 10.0)];
        let model = BarChartModel::build(&data, &config).unwrap();

        assert_eq!(model.baseline, 300.0);
        assert_eq!(model.plot_x, (60.0, 540.0));
        assert_eq!(model.plot_y.0, 40.0);
    }

    #[test]
    fn test_bar_chart_axis_ticks() {
        let data = vec![
            CategoryPoint::new("1 rooms", 450.0),
            CategoryPoint::new("2 rooms", 1_830.0),
        ];
        let model = BarChartModel::build(&data, &BarChartConfig::new(500.0, 300.0)).unwrap();

        let x_labels: Vec<&str> = model.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(x_labels, vec!["1 rooms", "2 rooms"]);

        let last = model.y_ticks.last().unwrap();
        assert_eq!(last.label, "2,000");
        assert_close(last.position, model.plot_y.0);
    }

    // ===== Pie Chart Tests =====

    #[test]
    fn test_pie_chart_tooltip_and_legend_share_text() {
        let data = to_percentage_distribution(&create_api_records());
        let model = PieChartModel::build(&data, &PieChartConfig::new(400.0, 400.0));

        // 5, 6 and 8 rooms fall below 5% and merge
        assert_eq!(
            model.slices.last().unwrap().key,
            CategoryKey::from("Other")
        );
        let percent_total: f64 = model.slices.iter().map(|s| s.percent).sum();
        assert!((percent_total - 100.0).abs() < 1e-9);

        let hover = HoverState::at(1);
        let tooltip = model.tooltip(&hover).unwrap();
        assert_eq!(tooltip.text, model.slices[1].label());
        assert_eq!(model.paint_order(&hover).last(), Some(&1));
    }

    #[test]
    fn test_pie_chart_colors_stable_across_builds() {
        let data = vec![
            CategoryPoint::new(1, 50.0),
            CategoryPoint::new(2, 30.0),
            CategoryPoint::new(3, 20.0),
        ];
        let config = PieChartConfig::new(300.0, 300.0);

        let first = PieChartModel::build(&data, &config);
        let second = PieChartModel::build(&data, &config);
        assert_eq!(first.slices, second.slices);
    }

    #[test]
    fn test_pie_chart_empty() {
        let model = PieChartModel::build(&[], &PieChartConfig::new(400.0, 400.0));
        assert!(model.is_empty());
        assert_eq!(model.total, 0.0);
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_accessors() {
        let records = Rc::new(create_api_records());
        let loaded = FetchState::Loaded(records.clone());

        assert!(!loaded.is_loading());
        assert_eq!(loaded.data(), Some(&records));
        assert_eq!(loaded.error(), None);

        let loading: FetchState<Vec<StatRecord>> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: FetchState<Vec<StatRecord>> = FetchState::Error("Test error".to_string());
        assert_eq!(error.error(), Some("Test error"));
        assert!(error.data().is_none());
    }

    #[test]
    fn test_fetch_state_equality() {
        let state1 = FetchState::Loaded(Rc::new(create_api_records()));
        let state2 = FetchState::Loaded(Rc::new(create_api_records()));
        assert_eq!(state1, state2);
    }

    // ===== Property Tests =====

    #[test]
    fn test_property_deserialization() {
        let json = r#"{
            "_id": "6650f1c2a3",
            "address": "Av. Colón 1200",
            "rooms": 3,
            "square_meters_area": 80,
            "rental_price_usd_normalized": 400.0,
            "expenses_price_usd_normalized": 50.0,
            "scraped_at": "2024-05-20T10:15:30.500000",
            "parking": 1
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.display_address(), "Av. Colón 1200");
        assert_eq!(property.total_monthly_cost(), Some(450.0));
        assert_eq!(property.rent_per_square_meter(), Some(5.0));
        assert!(property.scraped_at.is_some());
    }

    #[test]
    fn test_listing_batch_survives_bad_date() {
        let json = r#"[
            {"_id": "a", "scraped_at": "2024-05-20T10:15"},
            {"_id": "b", "scraped_at": "20/05/2024"}
        ]"#;

        let properties: Vec<Property> = serde_json::from_str(json).unwrap();
        assert_eq!(properties.len(), 2);
        assert!(properties[0].scraped_at.is_some());
        assert_eq!(properties[1].scraped_at, None);
    }

    #[test]
    fn test_property_minimal() {
        let property: Property = serde_json::from_str(r#"{"_id": "x1", "scraped_at": null}"#).unwrap();

        assert_eq!(property.display_address(), "x1");
        assert_eq!(property.total_monthly_cost(), None);
        assert_eq!(property.scraped_at, None);
    }
}
