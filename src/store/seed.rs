//! Seed records the catalog starts from.
use crate::models::item::{Availability, Item, ItemDetails, ItemKind};
use crate::models::review::Review;
use crate::models::user::User;
use chrono::{DateTime, Utc};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    year: i32,
    pages: u32,
    genres: &[&str],
    rating: f32,
    ratings_count: u32,
    similar: &[&str],
    popular: bool,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        img: format!("https://placehold.co/200x300/1f2937/ffffff?text={}", id),
        kind: ItemKind::Book,
        details: ItemDetails {
            author: Some(author.to_string()),
            pages: Some(pages),
            genres: strings(genres),
            average_rating: Some(rating),
            ratings_count,
            year: Some(year),
            ..ItemDetails::default()
        },
        similar_items: strings(similar),
        popular,
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    director: &str,
    year: i32,
    genres: &[&str],
    rating: f32,
    ratings_count: u32,
    similar: &[&str],
    popular: bool,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        img: format!("https://placehold.co/200x300/111827/ffffff?text={}", id),
        kind: ItemKind::Movie,
        details: ItemDetails {
            director: Some(director.to_string()),
            genres: strings(genres),
            average_rating: Some(rating),
            ratings_count,
            year: Some(year),
            ..ItemDetails::default()
        },
        similar_items: strings(similar),
        popular,
    }
}

pub fn items() -> Vec<Item> {
    let mut items = vec![
        book(
            "b1",
            "O Senhor dos Anéis",
            "J.R.R. Tolkien",
            1954,
            1216,
            &["Fantasia", "Aventura"],
            4.8,
            3120,
            &["b2", "b5"],
            true,
        ),
        book("b2", "O Hobbit", "J.R.R. Tolkien", 1937, 336, &["Fantasia"], 4.6, 2210, &["b1"], true),
        book(
            "b3",
            "Dom Casmurro",
            "Machado de Assis",
            1899,
            256,
            &["Romance", "Clássico"],
            4.3,
            980,
            &["b4"],
            false,
        ),
        book(
            "b4",
            "Cem Anos de Solidão",
            "Gabriel García Márquez",
            1967,
            448,
            &["Realismo Mágico"],
            4.5,
            1450,
            &["b3"],
            true,
        ),
        book("b5", "1984", "George Orwell", 1949, 416, &["Distopia", "Ficção Científica"], 4.7, 2890, &["b1"], false),
        movie(
            "m1",
            "Cidade de Deus",
            "Fernando Meirelles",
            2002,
            &["Drama", "Crime"],
            4.6,
            1720,
            &["m2"],
            true,
        ),
        movie("m2", "O Poderoso Chefão", "Francis Ford Coppola", 1972, &["Crime", "Drama"], 4.9, 4010, &["m1"], true),
        movie("m3", "Interestelar", "Christopher Nolan", 2014, &["Ficção Científica"], 4.4, 2530, &[], false),
    ];

    items[0].details.publisher = Some("HarperCollins".to_string());
    items[0].details.description =
        Some("A jornada de Frodo para destruir o Um Anel na Montanha da Perdição.".to_string());
    items[0].details.availability = Availability {
        online_store_url: Some("https://loja.example.com/senhor-dos-aneis".to_string()),
        library_url: Some("https://biblioteca.example.com/senhor-dos-aneis".to_string()),
        download_url: None,
    };
    items[2].details.description =
        Some("Bentinho relembra a juventude e o ciúme que sente de Capitu.".to_string());
    items[2].details.availability = Availability {
        online_store_url: None,
        library_url: Some("https://biblioteca.example.com/dom-casmurro".to_string()),
        download_url: Some("https://dominio-publico.example.com/dom-casmurro.pdf".to_string()),
    };
    items
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            username: "leitor_voraz".to_string(),
            bio: "Lendo um livro por semana desde 2015.".to_string(),
            email: Some("leitor@example.com".to_string()),
            born_in: Some("1994-05-12".to_string()),
            gender: None,
            avatar: None,
            following: strings(&["u2", "u3"]),
        },
        User {
            id: "u2".to_string(),
            username: "cinefila".to_string(),
            bio: "Cinema nacional e clássicos.".to_string(),
            email: None,
            born_in: None,
            gender: Some("Feminino".to_string()),
            avatar: None,
            following: Vec::new(),
        },
        User {
            id: "u3".to_string(),
            username: "ana_books".to_string(),
            bio: "Fantasia, sempre.".to_string(),
            email: Some("ana@example.com".to_string()),
            born_in: None,
            gender: None,
            avatar: None,
            following: strings(&["u1"]),
        },
        User {
            id: "u4".to_string(),
            username: "marcos".to_string(),
            bio: String::new(),
            email: None,
            born_in: None,
            gender: Some("Masculino".to_string()),
            avatar: None,
            following: strings(&["u1", "u2"]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    user: (&str, &str),
    item: (&str, &str),
    rating: u8,
    text: &str,
    likes: u32,
    comments_count: u32,
    timestamp: i64,
) -> Review {
    Review {
        id: id.to_string(),
        user_id: user.0.to_string(),
        username: user.1.to_string(),
        item_id: item.0.to_string(),
        item_title: item.1.to_string(),
        item_img: format!("https://placehold.co/200x300/1f2937/ffffff?text={}", item.0),
        rating,
        text: text.to_string(),
        likes,
        comments_count,
        timestamp: at(timestamp),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(
            "r1",
            ("u3", "ana_books"),
            ("b1", "O Senhor dos Anéis"),
            5,
            "Uma obra-prima. Releio todo ano.",
            72,
            4,
            1_709_388_000,
        ),
        review(
            "r2",
            ("u2", "cinefila"),
            ("m1", "Cidade de Deus"),
            5,
            "O melhor filme brasileiro já feito.",
            58,
            9,
            1_709_820_000,
        ),
        review(
            "r3",
            ("u4", "marcos"),
            ("b1", "O Senhor dos Anéis"),
            4,
            "Longo, mas vale cada página.",
            12,
            1,
            1_710_252_000,
        ),
        review(
            "r4",
            ("u1", "leitor_voraz"),
            ("b3", "Dom Casmurro"),
            4,
            "Capitu traiu ou não traiu?",
            31,
            15,
            1_710_684_000,
        ),
        review(
            "r5",
            ("u3", "ana_books"),
            ("b2", "O Hobbit"),
            5,
            "Leitura leve e encantadora.",
            8,
            0,
            1_711_116_000,
        ),
        review(
            "r6",
            ("u2", "cinefila"),
            ("m2", "O Poderoso Chefão"),
            5,
            "Perfeito do início ao fim.",
            0,
            0,
            1_711_548_000,
        ),
    ]
}
