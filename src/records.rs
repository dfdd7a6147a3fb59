/// One observed seismic event, mapped straight off a result row.
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub date_time: String,
    pub location: String,
    pub magnitude: f64,
    pub depth_km: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Count of records sharing one location string, one per pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAggregate {
    pub location: String,
    pub count: i64,
}

/// A grid column: header text plus the accessor that renders one cell.
pub struct TableColumn {
    pub title: &'static str,
    pub value: fn(&EarthquakeRecord) -> String,
}

/// Explicit column-to-field mapping, in display order.
pub const TABLE_COLUMNS: &[TableColumn] = &[
    TableColumn {
        title: "Date and Time",
        value: |r| r.date_time.clone(),
    },
    TableColumn {
        title: "Location",
        value: |r| r.location.clone(),
    },
    TableColumn {
        title: "Magnitude",
        value: |r| r.magnitude.to_string(),
    },
    TableColumn {
        title: "Depth (km)",
        value: |r| r.depth_km.to_string(),
    },
    TableColumn {
        title: "Latitude",
        value: |r| r.latitude.to_string(),
    },
    TableColumn {
        title: "Longitude",
        value: |r| r.longitude.to_string(),
    },
];
