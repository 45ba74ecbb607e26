//! Declarative macro for UPnP action definitions
//!
//! One invocation generates the request struct, the action marker type and
//! its [`UpnpAction`](crate::operation::UpnpAction) implementation.

/// Define a UPnP action with minimal boilerplate
///
/// Arguments are listed in wire order as `"Name" => value` pairs, each value
/// rendered with `to_string()`.
///
/// # Example
/// ```rust,ignore
/// define_upnp_action! {
///     action: SetVolume,
///     service: RenderingControl,
///     request: {
///         desired_volume: u16,
///     },
///     arguments: |req| [
///         "InstanceID" => INSTANCE_ID,
///         "Channel" => MASTER_CHANNEL,
///         "DesiredVolume" => req.desired_volume,
///     ],
///     response: (),
///     decode: false,
///     parse: |_response| Ok(()),
/// }
/// ```
#[macro_export]
macro_rules! define_upnp_action {
    (
        action: $action:ident,
        service: $service:ident,
        request: {
            $($field:ident: $field_type:ty),* $(,)?
        },
        arguments: |$req_param:ident| [
            $($arg_name:literal => $arg_value:expr),* $(,)?
        ],
        response: $response_type:ty,
        decode: $decode:literal,
        parse: |$response_param:ident| $parse_expr:expr $(,)?
    ) => {
        $crate::__paste! {
            #[doc = concat!("Request for the `", stringify!($action), "` action")]
            #[derive(Clone, Debug, Default, PartialEq)]
            pub struct [<$action Request>] {
                $(pub $field: $field_type,)*
            }

            #[doc = concat!("`", stringify!($service), "#", stringify!($action), "`")]
            #[derive(Clone, Copy, Debug)]
            pub struct [<$action Action>];

            impl $crate::operation::UpnpAction for [<$action Action>] {
                type Request = [<$action Request>];
                type Response = $response_type;

                const SERVICE: $crate::ServiceType = $crate::ServiceType::$service;
                const ACTION: &'static str = stringify!($action);
                const DECODE_RESPONSE: bool = $decode;

                #[allow(unused_variables)]
                fn arguments($req_param: &Self::Request) -> Vec<(&'static str, String)> {
                    vec![$(($arg_name, $arg_value.to_string())),*]
                }

                #[allow(unused_variables)]
                fn parse_response(
                    $response_param: &$crate::SoapResponse,
                ) -> Result<Self::Response, $crate::ApiError> {
                    $parse_expr
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::operation::{metadata, UpnpAction, INSTANCE_ID};

    define_upnp_action! {
        action: Echo,
        service: ConnectionManager,
        request: {
            text: String,
            count: u8,
        },
        arguments: |req| [
            "InstanceID" => INSTANCE_ID,
            "Text" => req.text,
            "Count" => req.count,
        ],
        response: String,
        decode: true,
        parse: |response| Ok(response.get("Text").unwrap_or_default().to_string()),
    }

    #[test]
    fn test_generated_action() {
        let request = EchoRequest {
            text: "a<b".to_string(),
            count: 3,
        };

        assert_eq!(EchoAction::ACTION, "Echo");
        assert_eq!(EchoAction::SERVICE, crate::ServiceType::ConnectionManager);
        assert!(EchoAction::DECODE_RESPONSE);
        assert_eq!(
            EchoAction::arguments(&request),
            vec![
                ("InstanceID", "0".to_string()),
                ("Text", "a<b".to_string()),
                ("Count", "3".to_string()),
            ]
        );
        assert_eq!(metadata::<EchoAction>().service, "ConnectionManager");
    }

    #[test]
    fn test_generated_parse() {
        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><u:EchoResponse xmlns:u="urn:x"><Text>hi</Text></u:EchoResponse></s:Body></s:Envelope>"#;
        let response = soap_client::envelope::decode(xml, "Echo").unwrap();

        assert_eq!(EchoAction::parse_response(&response).unwrap(), "hi");
    }
}
