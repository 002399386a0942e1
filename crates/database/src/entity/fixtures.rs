use crate::{character, planet, user, vehicle};

pub(crate) fn tatooine() -> planet::NewModel {
    planet::NewModel {
        name: "Tatooine".to_string(),
        description: "A harsh desert world orbiting twin suns".to_string(),
        diameter: 10465.0,
        rotation_period: 23.0,
        orbital_period: 304.0,
        gravity: 1.0,
        population: 200000,
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
        surface_water: 1.0,
        url: "https://swapi.dev/api/planets/1/".to_string(),
    }
}

pub(crate) fn luke() -> character::NewModel {
    character::NewModel {
        name: "Luke Skywalker".to_string(),
        description: "Jedi Knight".to_string(),
        homeworld: "Tatooine".to_string(),
        height: 172.0,
        mass: 77.0,
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        url: "https://swapi.dev/api/people/1/".to_string(),
    }
}

pub(crate) fn sand_crawler() -> vehicle::NewModel {
    vehicle::NewModel {
        name: "Sand Crawler".to_string(),
        description: "Mobile fortress used by Jawas".to_string(),
        vehicle_model: "Digger Crawler".to_string(),
        vehicle_class: "wheeled".to_string(),
        manufacturer: "Corellia Mining Corporation".to_string(),
        cost_in_credits: 150000.0,
        length: 36.8,
        crew: 46.0,
        passengers: 30.0,
        max_atmosphering_speed: 30.0,
        cargo_capacity: 50000.0,
        consumables: "2 months".to_string(),
        url: "https://swapi.dev/api/vehicles/4/".to_string(),
    }
}

pub(crate) fn new_user(email: &str, is_active: bool) -> user::NewModel {
    user::NewModel {
        email: email.to_string(),
        password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_active,
        favorite_name: format!("{email} favorites"),
    }
}
