use paleo_snap_application::ReferenceContent;
use paleo_snap_domain::{FossilSite, GeoPoint, PhotoSpot};

#[derive(Debug, Default)]
pub struct BuiltinReferenceContent;

impl ReferenceContent for BuiltinReferenceContent {
    fn fossil_sites(&self) -> Vec<FossilSite> {
        vec![
            site(
                "Hell Creek Formation",
                "Um dos locais mais ricos em fósseis do período Cretáceo.",
            ),
            site(
                "La Brea Tar Pits",
                "Famoso por preservar mamíferos da Era do Gelo.",
            ),
            site(
                "Dinosaur Provincial Park",
                "Conhecido por uma vasta diversidade de fósseis de dinossauros.",
            ),
            site(
                "Ischigualasto",
                "Uma das melhores janelas para o período Triássico.",
            ),
            site(
                "Solnhofen Limestone",
                "Famoso por fósseis bem preservados, como o Archaeopteryx.",
            ),
        ]
    }

    fn photo_spots(&self) -> Vec<PhotoSpot> {
        vec![
            spot(
                "HellCreek Formation",
                47.622905297912304,
                -106.87586396756201,
                "https://upload.wikimedia.org/wikipedia/commons/a/af/Hell_Creek.jpg",
            ),
            spot(
                "La Brea",
                34.06391766107107,
                -118.35643237991897,
                "https://www.latlong.net/photos/la-brea.jpg",
            ),
            spot(
                "Dinosaur Provincial Park",
                50.77116079728583,
                -111.49022477488813,
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTkA3XOrairD1os7w7xtvNaFr6TUYkiHnDC-A&s",
            ),
            spot(
                "Ischigualasto Provincial Park",
                -30.163666833709204,
                -67.8424189028875,
                "https://upload.wikimedia.org/wikipedia/commons/a/a9/Ischigualasto_provincial_park.jpg",
            ),
            spot(
                "Calcário Solnhofen",
                48.896807405098656,
                10.997343039291554,
                "https://upload.wikimedia.org/wikipedia/commons/b/bf/Solnhofen_-_cantera_de_calizas_tableadas.jpg",
            ),
            spot(
                "Faium",
                29.309024387921227,
                30.841596733813503,
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTD6sCVoxdgRh5-AXhEBDu3VrsWe0zVIbLeWA&s",
            ),
        ]
    }
}

fn site(title: &str, description: &str) -> FossilSite {
    FossilSite {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn spot(title: &str, latitude: f64, longitude: f64, image_url: &str) -> PhotoSpot {
    PhotoSpot {
        title: title.to_string(),
        location: GeoPoint {
            latitude,
            longitude,
        },
        image_url: image_url.to_string(),
    }
}
