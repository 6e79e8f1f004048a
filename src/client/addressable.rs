use super::ResourceClient;
use crate::error::ClientError;
use crate::models::Addressable;

impl ResourceClient<Addressable> {
    pub fn by_topic(&self, topic: &str) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["topic", topic])
    }

    pub fn by_port(&self, port: i32) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["port", &port.to_string()])
    }

    pub fn by_publisher(&self, publisher: &str) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["publisher", publisher])
    }

    pub fn by_address(&self, address: &str) -> Result<Vec<Addressable>, ClientError> {
        self.list_by(&["address", address])
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use crate::client::test_support::client;
    use crate::models::Addressable;

    #[test]
    fn test_lookups_by_attribute() {
        let mut server = Server::new();
        let by_port = server
            .mock("GET", "/api/v1/addressable/port/49977")
            .with_body(r#"[{"id": "a1", "name": "camera addr", "port": 49977}]"#)
            .expect(1)
            .create();
        let by_topic = server
            .mock("GET", "/api/v1/addressable/topic/notifications")
            .with_body("[]")
            .expect(1)
            .create();

        let client = client::<Addressable>(&server);
        assert_eq!(client.by_port(49977).unwrap()[0].name, "camera addr");
        assert!(client.by_topic("notifications").unwrap().is_empty());
        by_port.assert();
        by_topic.assert();
    }

    #[test]
    fn test_publisher_and_address() {
        let mut server = Server::new();
        let _p = server
            .mock("GET", "/api/v1/addressable/publisher/FuseExportPublisher")
            .with_body(r#"[{"name": "export"}]"#)
            .create();
        let _a = server
            .mock("GET", "/api/v1/addressable/address/172.17.0.1")
            .with_body("[]")
            .create();

        let client = client::<Addressable>(&server);
        assert_eq!(client.by_publisher("FuseExportPublisher").unwrap().len(), 1);
        assert!(client.by_address("172.17.0.1").unwrap().is_empty());
    }
}
