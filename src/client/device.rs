use super::ResourceClient;
use crate::error::ClientError;
use crate::models::Device;

impl ResourceClient<Device> {
    pub fn by_label(&self, label: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["label", label])
    }

    /// Fails with `NotFound` when no service has `service_id`.
    pub fn for_service(&self, service_id: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["service", service_id])
    }

    pub fn for_service_name(&self, service_name: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["servicename", service_name])
    }

    /// Fails with `NotFound` when no profile has `profile_id`.
    pub fn for_profile(&self, profile_id: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["profile", profile_id])
    }

    pub fn for_profile_name(&self, profile_name: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["profilename", profile_name])
    }

    /// Fails with `NotFound` when no addressable has `addressable_id`.
    pub fn for_addressable(&self, addressable_id: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["addressable", addressable_id])
    }

    pub fn for_addressable_name(&self, addressable_name: &str) -> Result<Vec<Device>, ClientError> {
        self.list_by(&["addressablename", addressable_name])
    }

    /// Like `update_last_connected`, and asks the service to notify the
    /// device's service of the change when `notify` is set.
    pub fn update_last_connected_and_notify(
        &self,
        id: &str,
        time: i64,
        notify: bool,
    ) -> Result<bool, ClientError> {
        self.put_path(&[id, "lastconnected", &time.to_string(), &notify.to_string()])
    }

    pub fn update_last_connected_by_name_and_notify(
        &self,
        name: &str,
        time: i64,
        notify: bool,
    ) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "lastconnected", &time.to_string(), &notify.to_string()])
    }

    pub fn update_last_reported_and_notify(
        &self,
        id: &str,
        time: i64,
        notify: bool,
    ) -> Result<bool, ClientError> {
        self.put_path(&[id, "lastreported", &time.to_string(), &notify.to_string()])
    }

    pub fn update_last_reported_by_name_and_notify(
        &self,
        name: &str,
        time: i64,
        notify: bool,
    ) -> Result<bool, ClientError> {
        self.put_path(&["name", name, "lastreported", &time.to_string(), &notify.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use crate::client::test_support::client;
    use crate::models::{AdminState, Device, OperatingState};

    const DEVICE: &str = r#"[{
        "id": "d1",
        "name": "thermostat",
        "labels": ["hvac"],
        "addressable": {"id": "a1", "name": "thermostat addr"},
        "service": {"id": "s1", "name": "hvac service"},
        "profile": {"id": "p1", "name": "hvac profile"}
    }]"#;

    #[test]
    fn test_relation_lookups() {
        let mut server = Server::new();
        let paths = [
            "/api/v1/device/service/s1",
            "/api/v1/device/servicename/hvac-service",
            "/api/v1/device/profile/p1",
            "/api/v1/device/profilename/hvac-profile",
            "/api/v1/device/addressable/a1",
            "/api/v1/device/addressablename/thermostat-addr",
        ];
        let mocks: Vec<_> = paths
            .iter()
            .map(|path| server.mock("GET", *path).with_body(DEVICE).expect(1).create())
            .collect();

        let client = client::<Device>(&server);
        assert_eq!(client.for_service("s1").unwrap()[0].name, "thermostat");
        assert_eq!(client.for_service_name("hvac-service").unwrap().len(), 1);
        assert_eq!(client.for_profile("p1").unwrap().len(), 1);
        assert_eq!(client.for_profile_name("hvac-profile").unwrap().len(), 1);
        assert_eq!(client.for_addressable("a1").unwrap().len(), 1);
        assert_eq!(client.for_addressable_name("thermostat-addr").unwrap().len(), 1);
        mocks.iter().for_each(|m| m.assert());
    }

    #[test]
    fn test_unknown_label_is_empty() {
        let mut server = Server::new();
        let _m = server
            .mock("GET", "/api/v1/device/label/badlabel")
            .with_body("[]")
            .create();

        assert!(client::<Device>(&server).by_label("badlabel").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_parent_is_not_found() {
        let mut server = Server::new();
        let _s = server
            .mock("GET", "/api/v1/device/servicename/badservice")
            .with_status(404)
            .create();
        let _p = server
            .mock("GET", "/api/v1/device/profile/badprofile")
            .with_status(404)
            .create();
        let _a = server
            .mock("GET", "/api/v1/device/addressablename/badaddress")
            .with_status(404)
            .create();

        let client = client::<Device>(&server);
        assert!(client.for_service_name("badservice").unwrap_err().is_not_found());
        assert!(client.for_profile("badprofile").unwrap_err().is_not_found());
        assert!(client.for_addressable_name("badaddress").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_without_service_is_conflict() {
        let mut server = Server::new();
        let _m = server
            .mock("POST", "/api/v1/device")
            .with_status(409)
            .with_body("A device must be associated to a known device service.")
            .create();

        let device = Device {
            name: "orphan".into(),
            ..Default::default()
        };
        assert!(client::<Device>(&server).add(&device).unwrap_err().is_conflict());
    }

    #[test]
    fn test_lower_case_states_decode_and_update() {
        let mut server = Server::new();
        let _get = server
            .mock("GET", "/api/v1/device/d1")
            .with_body(
                r#"{"id": "d1", "name": "thermostat", "adminState": "unlocked", "operatingState": "enabled"}"#,
            )
            .create();
        let _list = server
            .mock("GET", "/api/v1/device/label/hvac")
            .with_body(
                r#"[{"id": "d1", "name": "thermostat", "adminState": "locked", "operatingState": "disabled"},
                    {"id": "d2", "name": "boiler", "adminState": "unlocked", "operatingState": "enabled"}]"#,
            )
            .create();
        let put = server
            .mock("PUT", "/api/v1/device/d1/opstate/disabled")
            .with_body("true")
            .expect(1)
            .create();

        let client = client::<Device>(&server);
        let device = client.get("d1").unwrap();
        assert_eq!(device.admin_state, AdminState::Unlocked);
        assert_eq!(device.operating_state, OperatingState::Enabled);

        let devices = client.by_label("hvac").unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].admin_state, AdminState::Locked);
        assert_eq!(devices[0].operating_state, OperatingState::Disabled);

        assert!(client.update_op_state("d1", OperatingState::Disabled).unwrap());
        put.assert();
    }

    #[test]
    fn test_notify_variants_append_flag() {
        let mut server = Server::new();
        let by_id = server
            .mock("PUT", "/api/v1/device/d1/lastconnected/1000/true")
            .with_body("true")
            .expect(1)
            .create();
        let by_name = server
            .mock("PUT", "/api/v1/device/name/thermostat/lastreported/2000/false")
            .with_body("true")
            .expect(1)
            .create();

        let client = client::<Device>(&server);
        assert!(client.update_last_connected_and_notify("d1", 1000, true).unwrap());
        assert!(client
            .update_last_reported_by_name_and_notify("thermostat", 2000, false)
            .unwrap());
        by_id.assert();
        by_name.assert();
    }
}
