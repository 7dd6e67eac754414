#[cfg(test)]
mod tests {
    use crate::cluster::{Cluster, Clustering, Point};
    use crate::error::Error;
    use crate::records::{Kind, Record, assemble, to_feature_collection};
    use crate::stations::Station;
    use geojson::JsonObject;
    use serde_json::{Value, json};

    fn stations() -> Vec<Station> {
        vec![
            Station::new(Point([0.0, 0.0]), "Astor Pl", "6 all times"),
            Station::new(Point([0.0, 0.001]), "Bleecker St", "6 all times"),
            Station::new(Point([0.0, 0.002]), "Spring St", "6 all times"),
            Station::new(Point([10.0, 10.0]), "Far Rockaway", "A all times"),
        ]
    }

    #[test]
    fn test_station_and_cluster_records() {
        let stations = stations();
        let candidates: Vec<(usize, &Station)> = stations.iter().enumerate().collect();
        let clustering = Clustering {
            clusters: vec![Cluster {
                c: 0,
                points: vec![0, 1, 2],
            }],
            noise: vec![3],
        };

        let records = assemble(&candidates, &clustering).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].kind(), Kind::Station);
        assert_eq!(records[0].title(), "Far Rockaway Station");
        assert_eq!(records[0].description(), "A all times");
        assert_eq!(records[0].position(), Point([10.0, 10.0]));

        assert_eq!(records[1].kind(), Kind::Cluster);
        assert_eq!(records[1].title(), "Station Cluster #1");
        assert_eq!(records[1].description(), "Contains 3 stations");
        let center = records[1].position();
        assert!(center.lng().abs() < 1e-12);
        assert!((center.lat() - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_cluster_ordinals_are_one_based() {
        let stations = stations();
        let candidates: Vec<(usize, &Station)> = stations.iter().enumerate().collect();
        let clustering = Clustering {
            clusters: vec![
                Cluster {
                    c: 0,
                    points: vec![0, 1],
                },
                Cluster {
                    c: 1,
                    points: vec![2, 3],
                },
            ],
            noise: vec![],
        };

        let records = assemble(&candidates, &clustering).unwrap();
        let titles: Vec<&str> = records.iter().map(Record::title).collect();
        assert_eq!(titles, vec!["Station Cluster #1", "Station Cluster #2"]);
    }

    #[test]
    fn test_missing_notes_names_the_station() {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!("Court Sq"));
        let mut stations = stations();
        stations.push(Station::with_properties(Point([5.0, 5.0]), properties));

        // Candidate ids differ from slice positions
        let candidates: Vec<(usize, &Station)> = vec![(17, &stations[3]), (42, &stations[4])];
        let clustering = Clustering {
            clusters: vec![],
            noise: vec![0, 1],
        };

        assert_eq!(
            assemble(&candidates, &clustering).unwrap_err(),
            Error::MissingMetadata {
                station: 42,
                field: "notes"
            }
        );
    }

    #[test]
    fn test_missing_name_in_cluster_is_fine() {
        let nameless = Station::with_properties(Point([0.0, 0.0]), JsonObject::new());
        let other = Station::with_properties(Point([0.0, 0.001]), JsonObject::new());
        let candidates = vec![(0, &nameless), (1, &other)];
        let clustering = Clustering {
            clusters: vec![Cluster {
                c: 0,
                points: vec![0, 1],
            }],
            noise: vec![],
        };
        assert_eq!(assemble(&candidates, &clustering).unwrap().len(), 1);
    }

    #[test]
    fn test_feature_collection_encoding() {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!("Astor Pl"));
        properties.insert("notes".to_string(), json!("6 all times"));
        properties.insert("url".to_string(), json!("http://web.mta.info/"));
        let station = Station::with_properties(Point([-73.99, 40.73]), properties);
        let others = stations();

        let candidates = vec![(0, &station), (1, &others[0]), (2, &others[1]), (3, &others[2])];
        let clustering = Clustering {
            clusters: vec![Cluster {
                c: 0,
                points: vec![1, 2, 3],
            }],
            noise: vec![0],
        };
        let records = assemble(&candidates, &clustering).unwrap();
        let encoded: Value = serde_json::to_value(to_feature_collection(&records)).unwrap();

        assert_eq!(encoded["type"], "FeatureCollection");
        let features = encoded["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);

        let station_feature = &features[0];
        assert_eq!(station_feature["geometry"]["coordinates"], json!([-73.99, 40.73]));
        assert_eq!(station_feature["properties"]["type"], "station");
        assert_eq!(station_feature["properties"]["title"], "Astor Pl Station");
        assert_eq!(station_feature["properties"]["description"], "6 all times");
        assert_eq!(station_feature["properties"]["url"], "http://web.mta.info/");

        let cluster_feature = &features[1];
        assert_eq!(cluster_feature["properties"]["type"], "cluster");
        assert_eq!(cluster_feature["properties"]["count"], 3);
        assert_eq!(cluster_feature["bbox"], json!([0.0, 0.0, 0.0, 0.002]));
    }
}
