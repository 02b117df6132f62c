use std::collections::HashSet;

use geojson::Feature;


/// Builds a feature callback keeping only the properties named in the comma
/// separated `include` list. `None` means no filtering at all, while an empty
/// list strips every property.
pub fn limit_properties(include: Option<&str>) -> Option<impl FnMut(&mut Feature)> {
    let include: HashSet<String> = include?
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    Some(move |feature: &mut Feature| {
        if let Some(properties) = feature.properties.as_mut() {
            properties.retain(|key, _| include.contains(key));
        }
    })
}
