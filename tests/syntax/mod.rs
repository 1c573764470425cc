mod tests_geo_uri;
mod tests_serde;
