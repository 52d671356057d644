//! German labels for OpenWeather condition descriptions.

/// Returns the German text for an OpenWeather description such as
/// `"clear sky"`, or the input unchanged when the phrase is unknown.
pub fn translate(description: &str) -> &str {
    match description {
        "clear sky" => "Klarer Himmel",
        "few clouds" => "Wenige Wolken",
        "scattered clouds" => "Vereinzelte Wolken",
        "broken clouds" => "Aufgelockerte Bewölkung",
        "overcast clouds" => "Bedeckt",
        "light rain" => "Leichter Regen",
        "moderate rain" => "Mäßiger Regen",
        "heavy intensity rain" => "Starker Regen",
        "very heavy rain" => "Sehr starker Regen",
        "extreme rain" => "Extremer Regen",
        "freezing rain" => "Gefrierender Regen",
        "light intensity shower rain" => "Leichter Schauerregen",
        "shower rain" => "Schauerregen",
        "heavy intensity shower rain" => "Starker Schauerregen",
        "ragged shower rain" => "Unregelmäßiger Schauerregen",
        "light snow" => "Leichter Schnee",
        "snow" => "Schnee",
        "heavy snow" => "Starker Schnee",
        "sleet" => "Schneeregen",
        "light shower sleet" => "Leichter Schneeregenschauer",
        "shower sleet" => "Schneeregenschauer",
        "light rain and snow" => "Leichter Regen und Schnee",
        "rain and snow" => "Regen und Schnee",
        "light shower snow" => "Leichter Schneeschauer",
        "shower snow" => "Schneeschauer",
        "heavy shower snow" => "Starker Schneeschauer",
        "mist" => "Nebel",
        "smoke" => "Rauch",
        "haze" => "Dunst",
        "sand/dust whirls" => "Sand-/Staubwirbel",
        "fog" => "Nebel",
        "sand" => "Sand",
        "dust" => "Staub",
        "volcanic ash" => "Vulkanasche",
        "squalls" => "Sturmböen",
        "tornado" => "Tornado",
        "thunderstorm with light rain" => "Gewitter mit leichtem Regen",
        "thunderstorm with rain" => "Gewitter mit Regen",
        "thunderstorm with heavy rain" => "Gewitter mit starkem Regen",
        "light thunderstorm" => "Leichtes Gewitter",
        "thunderstorm" => "Gewitter",
        "heavy thunderstorm" => "Starkes Gewitter",
        "ragged thunderstorm" => "Unregelmäßiges Gewitter",
        "thunderstorm with light drizzle" => "Gewitter mit leichtem Nieselregen",
        "thunderstorm with drizzle" => "Gewitter mit Nieselregen",
        "thunderstorm with heavy drizzle" => "Gewitter mit starkem Nieselregen",
        "light intensity drizzle" => "Leichter Nieselregen",
        "drizzle" => "Nieselregen",
        "heavy intensity drizzle" => "Starker Nieselregen",
        "light intensity drizzle rain" => "Leichter Nieselregen",
        "drizzle rain" => "Nieselregen",
        "heavy intensity drizzle rain" => "Starker Nieselregen",
        "shower rain and drizzle" => "Schauerregen und Nieselregen",
        "heavy shower rain and drizzle" => "Starker Schauerregen und Nieselregen",
        "shower drizzle" => "Nieselschauer",
        other => other,
    }
}

/// Upper-cases the first letter of every space separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
