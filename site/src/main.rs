use actix_files::Files;
use actix_files::NamedFile;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::path::PathBuf;

mod api;

async fn spa() -> actix_web::Result<NamedFile> {
    // any unknown GET falls through to the SPA shell
    Ok(NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/
    log::info!("listening on http://127.0.0.1:3000");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(api::contact::submit)
            // ① serve top-level static assets (images, resume)
            .service(Files::new("/assets", root.join("../assets")))
            // ② serve the SPA bundle built by Trunk
            .service(Files::new("/", "../dist").index_file("index.html"))
            // ③ fallback -> SPA for any other path
            .default_service(web::get().to(spa))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await
}
