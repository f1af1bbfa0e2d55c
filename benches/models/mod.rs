use std::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}
impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal)
    }
}

// only the map benches carry a payload
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug)]
pub struct Value {
    _data_0: [u8; 24],
    _data_1: [u8; 24],
}

pub trait TestKey: Ord + Clone {
    fn from_i(i: usize) -> Self;

    fn name() -> String;
}

impl TestKey for Point {
    fn from_i(i: usize) -> Self {
        Point {
            x: i as f64,
            y: i as f64,
        }
    }

    fn name() -> String {
        "Point".into()
    }
}

impl TestKey for String {
    fn from_i(i: usize) -> Self {
        format!("key_{:030}", i)
    }

    fn name() -> String {
        "String".into()
    }
}

impl TestKey for usize {
    fn from_i(i: usize) -> Self {
        i
    }

    fn name() -> String {
        "usize".into()
    }
}
