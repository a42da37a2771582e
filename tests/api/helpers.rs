use diesel::{Connection, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use once_cell::sync::Lazy;
use schitts::{
    configuration::{DatabaseSettings, Settings},
    schema::{customers, orders, servers},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
    utils::DbPool
};
use serde_json::Value;
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "schitts-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub api_client: reqwest::Client
}

impl TestApp {
    // Every test gets its own database, the application migrates it on startup
    fn create_db(settings: &DatabaseSettings) {
        let mut connection = PgConnection::establish(&settings.get_database_url())
            .expect("Failed to connect to postgres database");

        let query = format!(r#"CREATE DATABASE "{}";"#, settings.name);
        diesel::sql_query(query)
            .execute(&mut connection)
            .expect("Failed to create test database");
    }

    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.port = 0;
        settings.application.page_size = 2;
        settings.database.name = Uuid::new_v4().to_string();

        TestApp::create_db(&settings.database);

        let application = Application::new(settings)
            .await
            .expect("Failed to build application");

        tokio::task::spawn(application.server);

        TestApp{
            host: application.host,
            port: application.port,
            pool: application.pool,
            api_client: reqwest::Client::new()
        }
    }

    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client.get(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client.post(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client.patch(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.api_client.delete(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn create_dish(&self, name: &str, price: f64, kind: &str) -> String {
        let response = self.post_json("/api/v1/dish", &serde_json::json!({
            "name": name,
            "description": format!("{} of the house", name),
            "price": price,
            "type": kind
        })).await;
        assert_eq!(response.status().as_u16(), 201);

        let body = envelope(response).await;
        body["data"]["reference"].as_str().unwrap().to_string()
    }

    pub async fn create_customer(&self, first_name: &str, last_name: &str) -> String {
        let food = self.create_dish("poutine", 9.5, "FOOD").await;
        let drink = self.create_dish("lemonade", 3.0, "DRINK").await;

        let response = self.post_json("/api/v1/customer", &customer_body(first_name, last_name, &food, &drink)).await;
        assert_eq!(response.status().as_u16(), 201);

        let body = envelope(response).await;
        body["data"]["reference"].as_str().unwrap().to_string()
    }

    // Servers have no endpoint, they are written straight to the database
    pub fn seed_server(&self, first_name: &str, last_name: &str) -> i32 {
        let mut conn = self.pool.get().unwrap();

        diesel::insert_into(servers::table)
            .values((servers::first_name.eq(first_name), servers::last_name.eq(last_name)))
            .returning(servers::id)
            .get_result(&mut conn)
            .unwrap()
    }

    pub fn seed_order(&self, customer_reference: &str, server_id: Option<i32>) -> String {
        let mut conn = self.pool.get().unwrap();
        let reference = format!("ORD-{}", &Uuid::new_v4().simple().to_string()[..10].to_uppercase());

        let customer_id: i32 = customers::table
            .filter(customers::reference.eq(customer_reference))
            .select(customers::id)
            .first(&mut conn)
            .unwrap();

        diesel::insert_into(orders::table)
            .values((
                orders::reference.eq(&reference),
                orders::customer_id.eq(customer_id),
                orders::server_id.eq(server_id)
            ))
            .execute(&mut conn)
            .unwrap();

        reference
    }
}

pub fn customer_body(first_name: &str, last_name: &str, food: &str, drink: &str) -> Value {
    serde_json::json!({
        "email": format!("{}.{}@rosebud.ca", first_name, last_name).to_lowercase(),
        "first_name": first_name,
        "last_name": last_name,
        "phone_number": "+1 613 555 0199",
        "address": "1 Motel Road",
        "city": "Schitt's Creek",
        "favorite_food": food,
        "favorite_drink": drink,
        "type": "IN TOWN",
        "bill_split": "PER PERSON"
    })
}

pub async fn envelope(response: reqwest::Response) -> Value {
    response.json::<Value>().await.expect("Response body is not json")
}
