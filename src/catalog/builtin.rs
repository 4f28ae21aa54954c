//! The built-in word catalog.
//!
//! Ten categories of ten words each, with a hint per word for assist mode
//! and a one-line description for the category picker.

use super::category::Category;
use super::registry::WordCatalog;

/// Build the stock catalog.
///
/// The first category ("random") doubles as the fallback when an unknown
/// category id is requested.
#[must_use]
pub fn builtin() -> WordCatalog {
    let mut catalog = WordCatalog::new();

    catalog.register(
        Category::new("random", "Aleatorio", "¡Sorpresa! Palabras de todo tipo.")
            .with_word("Unicornio", "cuerno")
            .with_word("Ovni", "espacio")
            .with_word("Fantasma", "sábana")
            .with_word("Dinosaurio", "extinto")
            .with_word("Zombie", "cerebro")
            .with_word("Robot", "metal")
            .with_word("Ninja", "sigilo")
            .with_word("Pirata", "barco")
            .with_word("Vampiro", "sangre")
            .with_word("Superhéroe", "capa"),
    );

    catalog.register(
        Category::new("food", "Comida", "Platos y antojos para abrir el apetito.")
            .with_word("Pizza", "queso")
            .with_word("Hamburguesa", "pan")
            .with_word("Sushi", "arroz")
            .with_word("Tacos", "maíz")
            .with_word("Paella", "mariscos")
            .with_word("Pasta", "italia")
            .with_word("Ensalada", "verde")
            .with_word("Helado", "frío")
            .with_word("Chocolate", "cacao")
            .with_word("Empanada", "relleno"),
    );

    catalog.register(
        Category::new("animals", "Animales", "Criaturas grandes, pequeñas y salvajes.")
            .with_word("Perro", "ladrido")
            .with_word("Gato", "bigotes")
            .with_word("Elefante", "trompa")
            .with_word("León", "melena")
            .with_word("Delfín", "océano")
            .with_word("Águila", "alas")
            .with_word("Serpiente", "escamas")
            .with_word("Oso", "hiberna")
            .with_word("Jirafa", "cuello")
            .with_word("Pingüino", "hielo"),
    );

    catalog.register(
        Category::new("sports", "Deportes", "Acción, equipo y competencia.")
            .with_word("Fútbol", "balón")
            .with_word("Baloncesto", "aro")
            .with_word("Tenis", "raqueta")
            .with_word("Natación", "piscina")
            .with_word("Ciclismo", "pedales")
            .with_word("Boxeo", "guantes")
            .with_word("Golf", "hoyo")
            .with_word("Surf", "ola")
            .with_word("Esquí", "nieve")
            .with_word("Rugby", "ovalado"),
    );

    catalog.register(
        Category::new("movies", "Películas", "Historias, géneros y clásicos del cine.")
            .with_word("Titanic", "barco")
            .with_word("Matrix", "pastilla")
            .with_word("Avatar", "azul")
            .with_word("Inception", "sueños")
            .with_word("Gladiator", "coliseo")
            .with_word("Joker", "payaso")
            .with_word("Frozen", "hielo")
            .with_word("Coco", "mariachi")
            .with_word("Shrek", "pantano")
            .with_word("Batman", "murciélago"),
    );

    catalog.register(
        Category::new("countries", "Países", "Destinos y culturas alrededor del mundo.")
            .with_word("España", "paella")
            .with_word("México", "tacos")
            .with_word("Argentina", "mate")
            .with_word("Japón", "sakura")
            .with_word("Francia", "torre")
            .with_word("Italia", "pizza")
            .with_word("Brasil", "samba")
            .with_word("Canadá", "arce")
            .with_word("Australia", "canguro")
            .with_word("Egipto", "pirámide"),
    );

    catalog.register(
        Category::new("technology", "Tecnología", "Gadgets, innovaciones y mundo digital.")
            .with_word("Internet", "red")
            .with_word("Smartphone", "pantalla")
            .with_word("Dron", "hélices")
            .with_word("Robot", "automático")
            .with_word("Laptop", "teclado")
            .with_word("Satélite", "órbita")
            .with_word("Impresora", "tinta")
            .with_word("Bluetooth", "inalámbrico")
            .with_word("Batería", "carga")
            .with_word("WiFi", "señal"),
    );

    catalog.register(
        Category::new("music", "Música", "Ritmos, géneros y escenas sonoras.")
            .with_word("Guitarra", "cuerdas")
            .with_word("Batería", "tambores")
            .with_word("Micrófono", "voz")
            .with_word("Concierto", "escenario")
            .with_word("Pop", "charts")
            .with_word("Rock", "distorsión")
            .with_word("Jazz", "impro")
            .with_word("Ópera", "tenor")
            .with_word("Reggaetón", "perreo")
            .with_word("DJ", "mezcla"),
    );

    catalog.register(
        Category::new("jobs", "Profesiones", "Oficios y profesiones del día a día.")
            .with_word("Doctor", "bata")
            .with_word("Ingeniero", "planos")
            .with_word("Chef", "cocina")
            .with_word("Profesor", "pizarra")
            .with_word("Piloto", "cabina")
            .with_word("Abogado", "ley")
            .with_word("Arquitecto", "maqueta")
            .with_word("Enfermero", "inyección")
            .with_word("Carpintero", "madera")
            .with_word("Mecánico", "taller"),
    );

    catalog.register(
        Category::new("cities", "Ciudades", "Metrópolis icónicas y sus vibes.")
            .with_word("Madrid", "oso")
            .with_word("Buenos Aires", "obelisco")
            .with_word("Tokio", "shibuya")
            .with_word("Nueva York", "manhattan")
            .with_word("París", "louvre")
            .with_word("Londres", "big ben")
            .with_word("Sídney", "ópera")
            .with_word("Ciudad de México", "zocalo")
            .with_word("Roma", "coliseo")
            .with_word("Berlín", "muro"),
    );

    catalog
}
