use georelate_frame::{Frame, FrameError, Value};

/// Fictitious polling locations (the left collection of the demo).
pub fn polling_stations() -> Result<Frame, FrameError> {
    Frame::from_columns([
        ("local_id", vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        (
            "lat",
            vec![
                Value::Float(-6.69255),
                Value::Float(-4.76871),
                Value::Float(-3.28926),
            ],
        ),
        (
            "lon",
            vec![
                Value::Float(-39.76566),
                Value::Float(-39.61186),
                Value::Float(-40.75443),
            ],
        ),
    ])
}

/// Fictitious aid project locations (the right collection of the demo).
///
/// Inspired by a real dataset used to study whether foreign aid affects
/// vote results at the polling-station level.
pub fn aid_projects() -> Result<Frame, FrameError> {
    Frame::from_columns([
        (
            "project_id_aid",
            vec![Value::from("p1"), Value::from("p2"), Value::from("p3")],
        ),
        (
            "lat_aid",
            vec![
                Value::Float(-6.61616),
                Value::Float(-4.76871),
                Value::Float(-4.26065),
            ],
        ),
        (
            "long_aid",
            vec![
                Value::Float(-39.9799),
                Value::Float(-39.77116),
                Value::Float(-39.3903),
            ],
        ),
    ])
}
