use super::*;

// =============================================================
// SearchQuery
// =============================================================

#[test]
fn search_query_default_matches_initial_controls() {
    let query = SearchQuery::default();
    assert_eq!(query.city, "toronto");
    assert_eq!(query.property_type, "all");
    assert_eq!(query.max_price, 1_000_000);
}

#[test]
fn search_query_string_uses_fixed_parameter_order() {
    let query = SearchQuery {
        city: "vancouver".to_owned(),
        property_type: "condo".to_owned(),
        max_price: 750_000,
    };
    assert_eq!(query.query_string(), "city=vancouver&type=condo&maxPrice=750000");
}

#[test]
fn search_query_string_is_deterministic_for_unchanged_inputs() {
    let query = SearchQuery::default();
    assert_eq!(query.query_string(), query.clone().query_string());
}

// =============================================================
// Property records
// =============================================================

#[test]
fn property_summary_decodes_backend_shape() {
    let json = r#"{
        "id": "p1",
        "address": "12 King St W",
        "price": 899000.0,
        "bedrooms": 3,
        "bathrooms": 2.5,
        "square_feet": 1850.0,
        "latitude": 43.6532,
        "longitude": -79.3832
    }"#;
    let summary: PropertySummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.bedrooms, 3);
    assert!((summary.bathrooms - 2.5).abs() < f64::EPSILON);
}

#[test]
fn property_summary_accepts_integer_fields_sent_as_floats() {
    let json = r#"{
        "id": "p1",
        "address": "12 King St W",
        "price": 899000,
        "bedrooms": 3.0,
        "bathrooms": 2,
        "square_feet": 1850,
        "latitude": 43.6532,
        "longitude": -79.3832
    }"#;
    let summary: PropertySummary = serde_json::from_str(json).unwrap();
    assert_eq!(summary.bedrooms, 3);
}

#[test]
fn property_detail_decodes_backend_shape() {
    let json = r#"{
        "id": "p9",
        "address": "44 Elgin St",
        "price": 650000,
        "bedrooms": 2,
        "bathrooms": 1.0,
        "square_feet": 980,
        "year_built": 1987.0,
        "neighborhood": "Centretown",
        "city": "ottawa",
        "walk_score": 92
    }"#;
    let detail: PropertyDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.year_built, 1987);
    assert_eq!(detail.walk_score, 92);
}

// =============================================================
// Valuation shapes (snake_case authoritative, camelCase aliased)
// =============================================================

fn snake_case_result() -> &'static str {
    r#"{
        "estimated_value": 1000000.0,
        "confidence_score": 87.0,
        "market_trends": {
            "price_trend": 3.2,
            "avg_days_on_market": 18.0,
            "price_per_sqft": 712.0
        },
        "comparables": [
            {
                "address": "15 Baldwin St",
                "price": 1050000.0,
                "sold_date": "2024-01-05",
                "square_feet": 1900.0,
                "similarity_score": 94.0
            }
        ]
    }"#
}

#[test]
fn valuation_result_decodes_snake_case_payload() {
    let result: ValuationResult = serde_json::from_str(snake_case_result()).unwrap();
    assert!((result.estimated_value - 1_000_000.0).abs() < f64::EPSILON);
    assert!((result.market_trends.price_trend - 3.2).abs() < f64::EPSILON);
    assert_eq!(result.comparables.len(), 1);
    assert!((result.comparables[0].similarity_score - 94.0).abs() < f64::EPSILON);
}

#[test]
fn valuation_result_decodes_legacy_camel_case_payload() {
    let json = r#"{
        "estimatedValue": 1000000.0,
        "confidence": 87.0,
        "marketTrends": {
            "yearlyAppreciation": 5.1,
            "averageDaysOnMarket": 18.0,
            "pricePerSqft": 712.0
        },
        "comparables": [
            {
                "address": "15 Baldwin St",
                "price": 1050000.0,
                "soldDate": "2024-01-05",
                "similarity": 94.0
            }
        ]
    }"#;
    let result: ValuationResult = serde_json::from_str(json).unwrap();
    assert!((result.estimated_value - 1_000_000.0).abs() < f64::EPSILON);
    assert!((result.confidence_score - 87.0).abs() < f64::EPSILON);
    // yearlyAppreciation is a different statistic; the trend stays at its
    // zero default rather than borrowing it.
    assert!((result.market_trends.price_trend).abs() < f64::EPSILON);
    assert!((result.comparables[0].similarity_score - 94.0).abs() < f64::EPSILON);
    // Legacy comparables omit square footage.
    assert!((result.comparables[0].square_feet).abs() < f64::EPSILON);
}

#[test]
fn valuation_request_serializes_expected_fields() {
    let request = ValuationRequest {
        address: "12 King St W".to_owned(),
        city: "toronto".to_owned(),
        property_type: "house".to_owned(),
        bedrooms: 3.0,
        bathrooms: 2.0,
        square_feet: 1850.0,
        lot_size: 3000.0,
        year_built: 1995.0,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["city"], "toronto");
    assert_eq!(value["property_type"], "house");
    assert_eq!(value["square_feet"], 1850.0);
}

#[test]
fn api_error_body_round_trips() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"missing square_feet"}"#).unwrap();
    assert_eq!(body.error, "missing square_feet");
}

// =============================================================
// Market overview
// =============================================================

#[test]
fn market_overview_decodes_city_map() {
    let json = r#"{
        "toronto": {
            "avg_price": 1100000.0,
            "total_listings": 412,
            "avg_days_on_market": 21.4,
            "price_trends": {"monthly": 1090000.0, "quarterly": 1075000.0, "yearly": 1010000.0},
            "hot_neighborhoods": [
                {"_id": "Leslieville", "avg_price": 980000.0, "total_listings": 31, "avg_days_on_market": 14.2}
            ]
        },
        "ottawa": {}
    }"#;
    let overview: MarketOverview = serde_json::from_str(json).unwrap();
    assert_eq!(overview.len(), 2);
    let toronto = &overview["toronto"];
    assert_eq!(toronto.total_listings, 412);
    assert_eq!(toronto.hot_neighborhoods[0].neighborhood.as_deref(), Some("Leslieville"));
    // Cities with no aggregates decode to zeroed stats.
    assert_eq!(overview["ottawa"].total_listings, 0);
}

#[test]
fn hot_neighborhood_tolerates_null_group_key() {
    let json = r#"{"_id": null, "avg_price": 500000.0, "total_listings": 3, "avg_days_on_market": 9.0}"#;
    let hood: HotNeighborhood = serde_json::from_str(json).unwrap();
    assert!(hood.neighborhood.is_none());
}

// =============================================================
// Map iteration order
// =============================================================

#[test]
fn market_overview_iterates_cities_in_stable_order() {
    let json = r#"{"vancouver": {}, "ottawa": {}, "toronto": {}}"#;
    let overview: MarketOverview = serde_json::from_str(json).unwrap();
    let cities: Vec<&str> = overview.keys().map(String::as_str).collect();
    assert_eq!(cities, vec!["ottawa", "toronto", "vancouver"]);
}
