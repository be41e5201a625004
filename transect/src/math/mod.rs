mod haversine;

pub(crate) use haversine::haversine_distance;
