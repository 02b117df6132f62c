use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{arg, App, ArgMatches};
use tracing::{debug, info};

use crate::error::{Result, TidyError};
use crate::input::read_geo_json;
use crate::output::to_compact_json;
use crate::transform::tidy_callbacks;
use crate::walk::Walker;

#[cfg(test)]
#[allow(unused_must_use)]
mod tests {
    use clap::App;
    use geojson::GeoJson;

    use crate::commands::{Tidy, TidyOptions};
    use crate::error::TidyError;
    use crate::test::with_input_file;

    fn options_from(args: &[&str]) -> crate::error::Result<TidyOptions> {
        let app = Tidy::register(App::new("geojson-tidy"));
        let matches = app.get_matches_from(args);
        TidyOptions::from_matches(&matches)
    }

    fn tidy_to_string(input: &str, precision: i32, properties: Option<&str>) -> String {
        let mut output = Vec::new();
        with_input_file(input, |path| {
            let options = TidyOptions {
                input: path.to_path_buf(),
                precision,
                properties: properties.map(str::to_string),
            };
            Tidy::run(&options, &mut output).unwrap();
        })
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn precision_defaults_to_three() {
        let options = options_from(&["geojson-tidy", "--input", "in.geojson"]).unwrap();

        assert_eq!(3, options.precision);
        assert_eq!(None, options.properties);
    }

    #[test]
    fn empty_properties_list_is_kept_apart_from_a_missing_one() {
        let options = options_from(&["geojson-tidy", "-i", "in.geojson", "--properties="]).unwrap();

        assert_eq!(Some("".to_string()), options.properties);
    }

    #[test]
    fn negative_precision_is_invalid_argument() {
        let result = options_from(&["geojson-tidy", "-i", "in.geojson", "--precision", "-2"]);

        assert!(matches!(result, Err(TidyError::InvalidArgument { name: "precision", .. })));
    }

    #[test]
    fn non_numeric_precision_is_invalid_argument() {
        let result = options_from(&["geojson-tidy", "-i", "in.geojson", "-p", "three"]);

        assert!(matches!(result, Err(TidyError::InvalidArgument { name: "precision", .. })));
    }

    #[test]
    fn writes_one_compact_line() {
        let output = tidy_to_string(
            r#"{
                "type": "Polygon",
                "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]
            }"#,
            3,
            None,
        );

        assert!(output.ends_with('\n'));
        assert_eq!(1, output.lines().count());
        assert_eq!(
            "{\"type\":\"Polygon\",\"coordinates\":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}\n",
            output
        );
    }

    #[test]
    fn rounds_coordinates_in_output() {
        let output = tidy_to_string(r#"{"type": "Point", "coordinates": [1.23456789, -2.3456001]}"#, 3, None);

        assert_eq!("{\"type\":\"Point\",\"coordinates\":[1.235,-2.346]}\n", output);
    }

    #[test]
    fn tiny_negative_coordinates_round_to_zero() {
        let output = tidy_to_string(r#"{"type": "Point", "coordinates": [-0.0001, 2]}"#, 3, None);

        assert_eq!("{\"type\":\"Point\",\"coordinates\":[0,2]}\n", output);
    }

    #[test]
    fn null_properties_are_kept_null() {
        let output = tidy_to_string(
            r#"{"type": "Feature", "properties": null, "geometry": {"type": "Point", "coordinates": [1, 2]}}"#,
            3,
            Some("a"),
        );

        assert_eq!(
            "{\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\",\"coordinates\":[1,2]},\"properties\":null}\n",
            output
        );
    }

    #[test]
    fn tidies_a_feature_collection() {
        let output = tidy_to_string(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"a": 1, "b": 2, "c": 3},
                 "geometry": {"type": "Point", "coordinates": [1.23456789, -2.3456001]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[0.00049, -0.0004, 12.3456], [1, 1]]}}
            ]}"#,
            3,
            Some("a, c"),
        );

        let doc: GeoJson = output.trim_end().parse().unwrap();
        let expected: GeoJson = r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"a": 1, "c": 3},
                 "geometry": {"type": "Point", "coordinates": [1.235, -2.346]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "LineString", "coordinates": [[0.0, -0.0, 12.3456], [1, 1]]}}
            ]}"#
        .parse()
        .unwrap();
        assert_eq!(expected, doc);
    }

    #[test]
    fn tidying_twice_is_byte_identical() {
        let input = r#"{"type": "Feature", "id": "x", "properties": {"name": "park", "area": 12.5, "z": null},
            "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[10.123456, 50.987654], [10.123456, 51.5], [11.75, 51.5], [11.75, 50.987654], [10.123456, 50.987654]],
                 [[10.5, 51.0], [11.0, 51.0], [11.0, 51.25], [10.5, 51.0]]]
            ]}}"#;

        let once = tidy_to_string(input, 4, Some("name,z"));
        let twice = tidy_to_string(&once, 4, Some("name,z"));

        assert_eq!(once, twice);
    }

    #[test]
    fn missing_input_fails() {
        let options = TidyOptions {
            input: "./does/not/exist.geojson".into(),
            precision: 3,
            properties: None,
        };

        let result = Tidy::run(&options, &mut Vec::<u8>::new());

        assert!(matches!(result, Err(TidyError::Io { .. })));
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let mut output = Vec::new();
        with_input_file(r#"{"type": "Feature", "geometry": {"type": "Hexagon"}}"#, |path| {
            let options = TidyOptions {
                input: path.to_path_buf(),
                precision: 3,
                properties: None,
            };
            assert!(Tidy::run(&options, &mut output).is_err());
        });
        assert!(output.is_empty());
    }
}

pub struct TidyOptions {
    pub input: PathBuf,
    pub precision: i32,
    pub properties: Option<String>,
}

impl TidyOptions {
    pub fn from_matches(args: &ArgMatches) -> Result<Self> {
        let input = args
            .value_of("input")
            .map(PathBuf::from)
            .ok_or_else(|| TidyError::invalid_argument("input", "", "is required"))?;

        let precision_str = args.value_of("precision").unwrap_or(DEFAULT_PRECISION);
        let precision: i32 = precision_str
            .parse()
            .map_err(|_| TidyError::invalid_argument("precision", precision_str, "must be an integer"))?;
        if precision < 0 {
            return Err(TidyError::invalid_argument("precision", precision, "must not be negative"));
        }

        Ok(TidyOptions {
            input,
            precision,
            properties: args.value_of("properties").map(str::to_string),
        })
    }
}

const DEFAULT_PRECISION: &str = "3";

pub struct Tidy {}

impl Tidy {
    pub fn register(app: App<'static>) -> App<'static> {
        app
            .arg(arg!(-i --input <INPUT> "Path to a GeoJSON file (.geojson or .geojson.gz)"))
            .arg(
                arg!(-p --precision [DIGITS] "The number of decimal digits to retain. Three digits is roughly 111 meters at the equator.")
                    .default_value(DEFAULT_PRECISION)
                    .allow_hyphen_values(true),
            )
            .arg(arg!(--properties [PROPERTIES] "A comma delimited list of properties to include. To strip all properties, use --properties=\"\"."))
            .arg(arg!(-v --verbose "Log progress to stderr"))
    }

    pub fn run(options: &TidyOptions, out: &mut impl Write) -> Result<()> {
        let start = Instant::now();

        let mut walker = Walker::new(tidy_callbacks(options.precision, options.properties.as_deref())?);
        debug!(
            "precision: {}, properties: {:?}",
            options.precision, options.properties
        );

        let now = Instant::now();
        info!("▶️  Loading {}", options.input.display());
        let mut doc = read_geo_json(&options.input)?;
        info!("✔️  Loaded input in {}ms", now.elapsed().as_millis());

        let now = Instant::now();
        info!("▶️  Tidying");
        walker.walk(&mut doc)?;
        info!("✔️  Tidied in {}ms", now.elapsed().as_millis());

        let json = to_compact_json(&doc)?;
        writeln!(out, "{}", json).map_err(|e| TidyError::io("Couldn't write output", e))?;

        info!("🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}
