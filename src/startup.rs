use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::Settings,
    routes::{default_route, scrape_route},
    services::{DatasetStore, DroidExtractor},
};

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let store = web::Data::new(DatasetStore::new(&settings.scraper.dataset_path));
    let extractor = web::Data::new(DroidExtractor::new(
        settings.scraper.webdriver_url.clone(),
    ));
    let scraper_settings = web::Data::new(settings.scraper);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/scrape")
                    .service(scrape_route::scrape_csv)
                    .service(scrape_route::scrape_links),
            )
            .app_data(store.clone())
            .app_data(extractor.clone())
            .app_data(scraper_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
