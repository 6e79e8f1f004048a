use super::ResourceClient;
use crate::error::ClientError;
use crate::models::ScheduleEvent;

impl ResourceClient<ScheduleEvent> {
    pub fn for_addressable(&self, addressable_id: &str) -> Result<Vec<ScheduleEvent>, ClientError> {
        self.list_by(&["addressable", addressable_id])
    }

    pub fn for_addressable_name(
        &self,
        addressable_name: &str,
    ) -> Result<Vec<ScheduleEvent>, ClientError> {
        self.list_by(&["addressablename", addressable_name])
    }

    /// Events routed to the named device service.
    pub fn for_service_name(&self, service_name: &str) -> Result<Vec<ScheduleEvent>, ClientError> {
        self.list_by(&["servicename", service_name])
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use crate::client::test_support::client;
    use crate::error::ErrorKind;
    use crate::models::ScheduleEvent;

    #[test]
    fn test_lookups_by_addressable_and_service() {
        let mut server = Server::new();
        let body = r#"[{"id": "e1", "name": "hourly read", "schedule": "hourly",
            "addressable": {"id": "a1", "name": "camera addr"}, "service": "camera service"}]"#;
        let by_id = server
            .mock("GET", "/api/v1/scheduleevent/addressable/a1")
            .with_body(body)
            .expect(1)
            .create();
        let by_service = server
            .mock("GET", "/api/v1/scheduleevent/servicename/camera-service")
            .with_body(body)
            .expect(1)
            .create();
        let _missing = server
            .mock("GET", "/api/v1/scheduleevent/addressablename/badaddress")
            .with_status(404)
            .create();

        let client = client::<ScheduleEvent>(&server);
        let events = client.for_addressable("a1").unwrap();
        assert_eq!(events[0].schedule.as_deref(), Some("hourly"));
        assert_eq!(client.for_service_name("camera-service").unwrap(), events);
        assert!(client.for_addressable_name("badaddress").unwrap_err().is_not_found());
        by_id.assert();
        by_service.assert();
    }

    #[test]
    fn test_add_with_unknown_schedule_is_unavailable() {
        let mut server = Server::new();
        let _m = server
            .mock("POST", "/api/v1/scheduleevent")
            .with_status(503)
            .with_body("Schedule not found for schedule event")
            .create();

        let event = ScheduleEvent {
            name: "orphan".into(),
            schedule: Some("nosuchschedule".into()),
            ..Default::default()
        };
        let err = client::<ScheduleEvent>(&server).add(&event).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }
}
