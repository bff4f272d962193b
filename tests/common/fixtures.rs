//! Static API fixtures used across harnesses.
//!
//! `PAGE_JSON` mirrors the shape of the real SWAPI starships endpoint,
//! trimmed to a handful of ships, with the extra fields the client must
//! ignore left in place.

/// A realistic first page of the starships endpoint.
pub const PAGE_JSON: &str = r#"{
    "count": 36,
    "next": "https://swapi.dev/api/starships/?page=2",
    "previous": null,
    "results": [
        {
            "name": "X-wing",
            "model": "T-65 X-wing",
            "manufacturer": "Incom Corporation",
            "cost_in_credits": "149999",
            "length": "12.5",
            "max_atmosphering_speed": "1050",
            "crew": "1",
            "passengers": "0",
            "starship_class": "Starfighter"
        },
        {
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "manufacturer": "Corellian Engineering Corporation",
            "cost_in_credits": "100000",
            "length": "34.37",
            "max_atmosphering_speed": "1050",
            "crew": "4",
            "passengers": "6",
            "starship_class": "Light freighter"
        },
        {
            "name": "Star Destroyer",
            "model": "Imperial I-class Star Destroyer",
            "manufacturer": "Kuat Drive Yards",
            "cost_in_credits": "150000000",
            "length": "1,600",
            "max_atmosphering_speed": "975",
            "crew": "47,060",
            "passengers": "n/a",
            "starship_class": "Star Destroyer"
        },
        {
            "name": "Death Star",
            "model": "DS-1 Orbital Battle Station",
            "manufacturer": "Imperial Department of Military Research, Sienar Fleet Systems",
            "cost_in_credits": "1000000000000",
            "length": "120000",
            "max_atmosphering_speed": "n/a",
            "crew": "342,953",
            "passengers": "843,342",
            "starship_class": "Deep Space Mobile Battlestation"
        }
    ]
}"#;

/// Ship names of `PAGE_JSON`, in document order.
pub const PAGE_NAMES: &[&str] = &["X-wing", "Millennium Falcon", "Star Destroyer", "Death Star"];

/// A body that is not the expected JSON document.
pub const MALFORMED_BODY: &str = "<html><body>502 Bad Gateway</body></html>";
