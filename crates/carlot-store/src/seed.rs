use carlot_types::{
    CarListing, Condition, ListingStatus, Seller, ServiceOffering, ServiceProvider, ServiceStatus,
    Transmission,
};

use crate::MarketStore;

/// Demo inventory loaded at startup so the app is browsable out of the box.
pub fn populate(store: &MarketStore) {
    if let Err(e) = store.register_user("Demo Driver", "demo@carlot.dev", "test-drive-1") {
        tracing::warn!("failed to seed demo account: {e}");
    }

    let dealer = Seller {
        id: "seller-harbor".into(),
        name: "Harbor Motors".into(),
        email: "sales@harbormotors.example".into(),
    };
    let private = Seller {
        id: "seller-min".into(),
        name: "Min Zhao".into(),
        email: "min@example.com".into(),
    };

    let cars = [
        (
            "car-corolla-22",
            "Toyota",
            "Corolla",
            2022,
            21_400.0,
            18_000,
            Condition::Certified,
            Transmission::Automatic,
            ListingStatus::Active,
            "Low mileage, full service history.",
            vec!["Adaptive cruise", "Lane assist"],
            &dealer,
        ),
        (
            "car-golf-18",
            "Volkswagen",
            "Golf",
            2018,
            12_900.0,
            74_500,
            Condition::Used,
            Transmission::Manual,
            ListingStatus::Active,
            "Two owners, new clutch at 70k.",
            vec!["Heated seats"],
            &private,
        ),
        (
            "car-model3-24",
            "Tesla",
            "Model 3",
            2024,
            38_900.0,
            2_100,
            Condition::New,
            Transmission::Automatic,
            ListingStatus::Active,
            "Delivery mileage only.",
            vec!["Autopilot", "Glass roof"],
            &dealer,
        ),
        (
            "car-civic-19",
            "Honda",
            "Civic",
            2019,
            14_200.0,
            52_300,
            Condition::Used,
            Transmission::Manual,
            ListingStatus::Pending,
            "Sale agreed, deposit taken.",
            vec![],
            &dealer,
        ),
        (
            "car-focus-16",
            "Ford",
            "Focus",
            2016,
            6_400.0,
            98_000,
            Condition::Used,
            Transmission::Manual,
            ListingStatus::Sold,
            "",
            vec![],
            &private,
        ),
        (
            "car-ix-25",
            "BMW",
            "iX",
            2025,
            61_000.0,
            150,
            Condition::New,
            Transmission::Automatic,
            ListingStatus::Draft,
            "Listing copy still in progress.",
            vec![],
            &dealer,
        ),
    ];

    for (id, make, model, year, price, mileage, condition, transmission, status, desc, features, seller) in cars {
        store.insert_car(CarListing {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
            price,
            mileage,
            condition,
            transmission,
            status,
            images: vec![format!("/assets/cars/{id}.jpg")],
            description: desc.into(),
            features: features.into_iter().map(String::from).collect(),
            seller: seller.clone(),
        });
    }

    let axle = ServiceProvider {
        id: "provider-axle".into(),
        name: "Axle & Co".into(),
        rating: 4.8,
        review_count: 112,
        image: "/assets/providers/axle.jpg".into(),
        location: "Leeds".into(),
        specialties: vec!["brakes".into(), "suspension".into()],
        description: "Independent garage, est. 1998.".into(),
        verified: true,
    };
    let quicklube = ServiceProvider {
        id: "provider-quicklube".into(),
        name: "QuickLube".into(),
        rating: 4.3,
        review_count: 58,
        image: "/assets/providers/quicklube.jpg".into(),
        location: "Manchester".into(),
        specialties: vec!["oil".into(), "filters".into()],
        description: "While-you-wait servicing.".into(),
        verified: false,
    };

    let services = [
        ("svc-brakes", "Brake inspection", "Front and rear pads, discs and lines.", 89.0, "45 min", "maintenance", &axle),
        ("svc-suspension", "Suspension check", "Shocks, springs and bushings.", 120.0, "1 hr", "maintenance", &axle),
        ("svc-oil", "Oil change", "Oil and filter, all grades stocked.", 49.0, "30 min", "maintenance", &quicklube),
        ("svc-valet", "Full valet", "Interior and exterior detail.", 75.0, "2 hr", "detailing", &quicklube),
    ];

    for (id, name, desc, price, duration, category, provider) in services {
        store.insert_service(ServiceOffering {
            id: id.into(),
            name: name.into(),
            description: desc.into(),
            price,
            duration: duration.into(),
            category: category.into(),
            status: ServiceStatus::Active,
            provider: provider.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_is_browsable() {
        let store = MarketStore::seeded();
        let cars = store.list_cars(None, None, None);
        assert!(cars.cars.len() >= 4);
        assert!(cars.cars.iter().all(|c| !c.id.is_empty()));
        let services = store.list_services(None, None);
        assert!(services.services.len() >= 3);
        assert!(store.authenticate("demo@carlot.dev", "test-drive-1").is_ok());
    }
}
