use super::{CellStyle, FeatureFlag, MinimumFlag, StatusEntity, SummaryShape, SummarySpec};

pub static SUMMARIES: &[SummarySpec] = &[
    SummarySpec {
        name: "shift-summary",
        resource_type: "shift-summaries",
        about: "Aggregate tender job schedule shifts",
        requires_dates: true,
        default_group_by: &["driver"],
        default_sort: &["shift_count:desc"],
        default_metrics: &["shift_count", "hours_sum", "tons_sum", "trip_sum"],
        entity_groups: &[
            "broker",
            "business_unit",
            "customer",
            "contractor",
            "trucker",
            "driver",
            "planner",
        ],
        group_columns: &[
            ("trailer", &["trailer_number"], &["trailer_id", "trailer_number"]),
            ("tender_job_schedule_shift", &["tender_job_schedule_shift_id"], &["tender_job_schedule_shift_id"]),
            ("driver_day", &["driver_day_id"], &["driver_day_id"]),
        ],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "lane-summary",
        resource_type: "cycle-summaries",
        about: "Aggregate hauling cycles by origin and destination",
        sends_metrics: false,
        cells: CellStyle::Lane,
        minimum: Some(MinimumFlag {
            flag: "min-transactions",
            filter: "material_transaction_count__min",
            help: "Drop rows with fewer than this many transactions",
        }),
        features: &[
            FeatureFlag {
                flag: "include-driver-movement-durations",
                feature: "cycle_summary_include_dmd",
                help: "Enable driver movement durations",
            },
            FeatureFlag {
                flag: "use-driver-day-trip-lead-minutes",
                feature: "cycle_summary_use_driver_day_trip_lead_minutes",
                help: "Enable driver day trip lead minutes metrics",
            },
            FeatureFlag {
                flag: "beta-driver-movement-segment-durations",
                feature: "cycle_summary_beta_driver_movement_segment_durations",
                help: "Enable beta driver movement segment durations",
            },
        ],
        default_group_by: &["origin", "destination"],
        default_sort: &["material_transaction_count:desc"],
        default_metrics: &[
            "cycle_count",
            "material_transaction_count",
            "cycle_minutes_median",
            "calculated_travel_minutes_median",
            "tons_sum",
        ],
        entity_groups: &[
            "material_type",
            "broker",
            "customer",
            "trucker",
            "driver",
            "job_site",
            "material_supplier",
            "material_site",
        ],
        group_columns: &[
            ("material_transaction", &["material_transaction_id"], &["material_transaction_id"]),
            ("trailer", &["trailer_number"], &["trailer_id", "trailer_number"]),
            (
                "job_production_plan",
                &["job_name", "job_number"],
                &["job_production_plan_id", "job_name", "job_number"],
            ),
            (
                "business_unit",
                &["business_unit_name"],
                &["business_unit_id", "business_unit_name", "business_unit_external_id"],
            ),
            (
                "origin",
                &["origin_name"],
                &[
                    "origin_id",
                    "origin_name",
                    "origin_organization_name",
                    "origin_type",
                    "origin_latitude",
                    "origin_longitude",
                ],
            ),
            (
                "destination",
                &["destination_name"],
                &[
                    "destination_id",
                    "destination_name",
                    "destination_organization_name",
                    "destination_type",
                    "destination_latitude",
                    "destination_longitude",
                ],
            ),
        ],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "material-transaction-summary",
        resource_type: "material-transaction-summaries",
        about: "Aggregate material transactions",
        default_group_by: &["material_site"],
        default_sort: &["material_transaction_count:desc"],
        default_metrics: &["material_transaction_count", "tons_sum", "tons_avg"],
        entity_groups: &[
            "broker",
            "business_unit",
            "customer",
            "trucker",
            "material_site",
            "material_supplier",
            "project",
            "job_production_plan",
            "planner",
            "project_manager",
            "developer",
            "job_site",
        ],
        group_columns: &[(
            "material_type",
            &["material_type_name"],
            &["material_type_id", "material_type_name", "material_type_display_name"],
        )],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "job-production-plan-summary",
        resource_type: "job-production-plan-summaries",
        about: "Aggregate job production plans",
        requires_dates: true,
        default_group_by: &["customer"],
        default_sort: &["plan_count:desc"],
        default_metrics: &["plan_count", "tons_sum", "truck_hours_sum", "cycle_count_sum"],
        entity_groups: &[
            "project",
            "customer",
            "broker",
            "business_unit",
            "planner",
            "project_manager",
            "contractor",
        ],
        group_columns: &[(
            "job_production_plan",
            &["job_production_plan_id"],
            &["job_production_plan_id"],
        )],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "driver-day-summary",
        resource_type: "driver-day-summaries",
        about: "Aggregate driver days",
        default_group_by: &["driver"],
        default_sort: &["driver_day_count:desc"],
        default_metrics: &["driver_day_count", "duration_hours_sum", "shift_count_sum"],
        entity_groups: &["broker", "trucker", "driver"],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "public-praise-summary",
        resource_type: "public-praise-summaries",
        about: "Aggregate public praise",
        default_group_by: &["recipient"],
        default_sort: &["public_praise_count:desc"],
        default_metrics: &["public_praise_count"],
        entity_groups: &[
            "broker",
            "customer",
            "trucker",
            "organization_broker",
            "given_by",
            "recipient",
            "culture_value",
        ],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "ptp-summary",
        resource_type: "project-transport-plan-summaries",
        about: "Aggregate project transport plans",
        default_group_by: &["broker"],
        default_sort: &["count:desc"],
        default_metrics: &["count", "strategy_set_prediction_correct_pct"],
        entity_groups: &[
            "strategy_set",
            "broker",
            "transport_order_project_office",
            "transport_order_project_category",
            "project_transport_plan_created_by",
        ],
        ..SummarySpec::DEFAULT
    },
    SummarySpec {
        name: "transport-summary",
        resource_type: "transport-summaries",
        about: "Status counts for transport orders, plans, assignments and live loads",
        shape: SummaryShape::Status,
        entity_types: &[
            StatusEntity {
                name: "transport_order",
                breakdown: Some("transport_orders"),
                fields: &[
                    ("lifecycle_status", "Lifecycle Status"),
                    ("unplanned", "Unplanned"),
                    ("overdue", "Overdue"),
                    ("at_risk", "At Risk"),
                ],
            },
            StatusEntity {
                name: "transport_plan",
                breakdown: Some("transport_plans"),
                fields: &[],
            },
            StatusEntity {
                name: "driver_assignment",
                breakdown: Some("driver_assignments"),
                fields: &[],
            },
            StatusEntity {
                name: "live_loads",
                breakdown: None,
                fields: &[
                    ("active", "Active"),
                    ("in_transit", "In Transit"),
                    ("at_pickup", "At Pickup"),
                    ("at_delivery", "At Delivery"),
                    ("on_schedule", "On Schedule"),
                    ("attention_needed", "Attention Needed"),
                    ("delayed", "Delayed"),
                ],
            },
        ],
        ..SummarySpec::DEFAULT
    },
];
