//! The standard 40-space table.
//!
//! Rows run in board order from the start space. Property rows are
//! `(name, price, base rent, rent with 1-4 houses, hotel rent, build cost)`.
//! Utilities and railways have a build cost of zero.

use super::space::{Property, RentSchedule, Space};

fn property(name: &str, price: u32, base: u32, houses: [u32; 4], hotel: u32, build_cost: u32) -> Space {
    Space::Property(Property::new(name, price, RentSchedule::new(base, houses, hotel), build_cost))
}

fn named(make: fn(String) -> Space, name: &str) -> Space {
    make(name.to_string())
}

fn start(name: String) -> Space {
    Space::Start { name }
}

fn fortune(name: String) -> Space {
    Space::Fortune { name }
}

fn misfortune(name: String) -> Space {
    Space::Misfortune { name }
}

fn jail(name: String) -> Space {
    Space::Jail { name }
}

fn go_to_jail(name: String) -> Space {
    Space::GoToJail { name }
}

fn neutral(name: String) -> Space {
    Space::Neutral { name }
}

fn tax(name: String) -> Space {
    Space::Tax { name }
}

/// Build the standard board, index 0 first.
#[must_use]
pub fn standard_spaces() -> Vec<Space> {
    vec![
        named(start, "Start"),
        property("Leblon", 100, 6, [30, 90, 270, 400], 550, 50),
        named(fortune, "Fortune"),
        property("Av. Presidente Vargas", 60, 2, [10, 30, 90, 160], 250, 50),
        property("Av. Nossa Senhora de Copacabana", 60, 4, [20, 60, 180, 320], 450, 50),
        property("Railway Company", 200, 25, [50, 100, 200, 300], 400, 0),
        property("Av. Brigadeiro Faria Lima", 100, 6, [30, 90, 270, 400], 550, 50),
        named(misfortune, "Misfortune"),
        property("Av. Rebouças", 100, 6, [30, 90, 270, 400], 550, 50),
        property("Av. 9 de Julho", 120, 8, [40, 100, 300, 450], 600, 50),
        // 10
        named(jail, "Jail"),
        property("Av. Europa", 140, 10, [50, 150, 450, 625], 750, 100),
        property("Water and Sewage Company", 150, 15, [30, 90, 180, 250], 400, 0),
        property("Rua Augusta", 140, 10, [50, 150, 450, 625], 750, 100),
        property("Av. Pacaembu", 160, 12, [60, 180, 500, 700], 900, 100),
        property("Central Railway Company", 200, 25, [50, 100, 200, 300], 400, 0),
        property("Parada Inglesa", 180, 14, [70, 200, 550, 750], 950, 100),
        named(fortune, "Fortune"),
        property("Brooklin", 180, 14, [70, 200, 550, 750], 950, 100),
        property("Morumbi", 200, 16, [80, 220, 600, 800], 1000, 100),
        // 20
        named(neutral, "Free Parking"),
        property("Jardim Europa", 220, 18, [90, 250, 700, 875], 1050, 150),
        named(misfortune, "Misfortune"),
        property("Jardim Paulista", 220, 18, [90, 250, 700, 875], 1050, 150),
        property("Rua Oscar Freire", 240, 20, [100, 300, 750, 925], 1100, 150),
        property("Southern Railway Company", 200, 25, [50, 100, 200, 300], 400, 0),
        property("Pacaembu", 260, 22, [110, 330, 800, 975], 1150, 150),
        property("Paulista", 260, 22, [110, 330, 800, 975], 1150, 150),
        property("Power Company", 150, 15, [30, 90, 180, 250], 400, 0),
        property("Higienópolis", 280, 24, [120, 360, 850, 1025], 1200, 150),
        // 30
        named(go_to_jail, "Go to Jail"),
        property("Vila Mariana", 300, 26, [130, 390, 900, 1100], 1275, 200),
        property("Consolação", 300, 26, [130, 390, 900, 1100], 1275, 200),
        named(fortune, "Fortune"),
        property("Pinheiros", 320, 28, [150, 450, 1000, 1200], 1400, 200),
        property("Northern Railway Company", 200, 25, [50, 100, 200, 300], 400, 0),
        named(misfortune, "Misfortune"),
        property("Moema", 350, 35, [175, 500, 1100, 1300], 1500, 200),
        named(tax, "Income Tax"),
        property("Ibirapuera", 400, 50, [200, 600, 1400, 1700], 2000, 200),
    ]
}
