use crate::destination::Destination;
use crate::models::WeatherReport;

pub fn forecast(destination: &str) -> WeatherReport {
    let (forecast, avg_temp_c, clothing) = match Destination::resolve(destination) {
        Destination::Paris => (
            "Mild temperatures with occasional rain. Partly cloudy most days.",
            18.5,
            "Light layers, a stylish jacket, comfortable walking shoes, and a compact umbrella.",
        ),
        Destination::Tokyo => (
            "Warm and humid with potential afternoon showers.",
            24.0,
            "Light, breathable clothing, comfortable walking shoes, and a small umbrella.",
        ),
        Destination::NewYork => (
            "Variable weather with potential for rain or sunshine. Cooler evenings.",
            20.0,
            "Layers including light sweaters, a versatile jacket, and comfortable walking shoes.",
        ),
        Destination::Bali => (
            "Hot and humid with occasional tropical showers. Very sunny.",
            29.5,
            "Light, breathable clothing, sun protection (hat, sunglasses, sunscreen), sandals, and swimwear.",
        ),
        Destination::London => (
            "Cool with frequent light rain and overcast skies.",
            16.0,
            "Layers, a waterproof jacket, umbrella, and comfortable waterproof shoes.",
        ),
        Destination::Sydney => (
            "Warm and sunny with mild evenings.",
            23.0,
            "Light clothing, sun protection, and a light layer for evenings.",
        ),
        Destination::Dubai => (
            "Very hot and dry with clear skies.",
            35.0,
            "Very light, loose clothing that covers skin for sun protection, hat, sunglasses, and sunscreen.",
        ),
        Destination::Rome => (
            "Warm and sunny with mild evenings.",
            25.0,
            "Light clothing, comfortable walking shoes, sun hat, and light layers for evening.",
        ),
        Destination::Bangkok | Destination::Mexico | Destination::Other => (
            "Partly cloudy with occasional showers.",
            22.0,
            "Light to medium layers, bring a light jacket and umbrella.",
        ),
    };

    WeatherReport {
        forecast: forecast.to_string(),
        avg_temp_c,
        clothing_suggestions: clothing.to_string(),
    }
}
