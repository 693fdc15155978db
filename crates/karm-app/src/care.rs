//! Public-care facility lookup.
//!
//! Static categories of public healthcare services, each resolving to a
//! Google Maps search link. With coordinates the link pins the search to
//! the area; without them it falls back to a general search.

/// One public healthcare service category.
pub struct CareLocation {
    pub name: &'static str,
    pub kind: &'static str,
    query: &'static str,
}

pub const CARE_LOCATIONS: [CareLocation; 8] = [
    CareLocation {
        name: "Nearest Hospital",
        kind: "Hospital",
        query: "hospitals",
    },
    CareLocation {
        name: "Urgent Care Center",
        kind: "Urgent Care",
        query: "urgent care",
    },
    CareLocation {
        name: "Public Health Clinic",
        kind: "Clinic",
        query: "public health clinic",
    },
    CareLocation {
        name: "Community Health Center",
        kind: "Health Center",
        query: "community health center",
    },
    CareLocation {
        name: "Pharmacy",
        kind: "Pharmacy",
        query: "pharmacy",
    },
    CareLocation {
        name: "Dental Clinic",
        kind: "Dental",
        query: "dental clinic",
    },
    CareLocation {
        name: "Mental Health Services",
        kind: "Mental Health",
        query: "mental health services",
    },
    CareLocation {
        name: "Women's Health Clinic",
        kind: "Women's Health",
        query: "women's health clinic",
    },
];

impl CareLocation {
    pub fn maps_link(&self, coords: Option<(f64, f64)>) -> String {
        maps_search_url(self.query, coords)
    }
}

/// Build a Google Maps search URL, pinned to `@lat,lng` when coordinates
/// are available.
pub fn maps_search_url(query: &str, coords: Option<(f64, f64)>) -> String {
    // Maps uses `+` between words; percent-encode the rest.
    let encoded = urlencoding::encode(query).replace("%20", "+");
    match coords {
        Some((lat, lng)) => {
            format!("https://www.google.com/maps/search/{encoded}/@{lat},{lng},12z")
        }
        None => format!("https://www.google.com/maps/search/{encoded}/"),
    }
}

/// Print the facility table for the `care` subcommand.
pub fn run(coords: Option<(f64, f64)>) {
    println!("Healthcare locations near you\n");
    match coords {
        Some((lat, lng)) => println!("Centered on {lat}, {lng}\n"),
        None => println!("No coordinates given - showing general searches\n"),
    }

    for location in &CARE_LOCATIONS {
        println!("  {} ({})", location.name, location.kind);
        println!("    {}", location.maps_link(coords));
    }

    println!();
    println!("For life-threatening emergencies, call your local emergency number immediately.");
    println!("  Emergency rooms: {}", maps_search_url("emergency room", coords));
    println!("  National Suicide Prevention: 988");
    println!("  Crisis Text Line: text HOME to 741741");
}
