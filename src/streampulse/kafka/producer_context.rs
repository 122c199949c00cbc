use log::{debug, error};
use rdkafka::config::RDKafkaLogLevel;
use rdkafka::error::KafkaError;
use rdkafka::message::DeliveryResult;
use rdkafka::producer::ProducerContext;
use rdkafka::{ClientContext, Message};

/// Maps librdkafka's syslog-style levels onto the `log` facade
pub fn convert_kafka_log_level(kafka_level: RDKafkaLogLevel) -> log::Level {
    match kafka_level {
        RDKafkaLogLevel::Emerg | RDKafkaLogLevel::Alert | RDKafkaLogLevel::Critical => {
            log::Level::Error
        }
        RDKafkaLogLevel::Error => log::Level::Error,
        RDKafkaLogLevel::Warning => log::Level::Warn,
        RDKafkaLogLevel::Notice | RDKafkaLogLevel::Info => log::Level::Info,
        RDKafkaLogLevel::Debug => log::Level::Debug,
    }
}

/// Producer context that routes librdkafka's internal log lines, global
/// errors, and per-message delivery reports through the `log` facade, so
/// broker-connectivity problems surface in the same stream as application
/// logs.
#[derive(Debug, Clone, Default)]
pub struct LoggingClientContext;

impl LoggingClientContext {
    pub fn new() -> Self {
        Self
    }
}

impl ClientContext for LoggingClientContext {
    fn log(&self, level: RDKafkaLogLevel, fac: &str, message: &str) {
        // `fac` names the librdkafka subsystem that emitted the line
        log::log!(
            convert_kafka_log_level(level),
            "Kafka log ({}): {}",
            fac,
            message
        );
    }

    fn error(&self, error: KafkaError, reason: &str) {
        error!("Kafka client error: {:?}, reason: {}", error, reason);
    }
}

impl ProducerContext for LoggingClientContext {
    type DeliveryOpaque = ();

    fn delivery(
        &self,
        delivery_result: &DeliveryResult<'_>,
        _delivery_opaque: Self::DeliveryOpaque,
    ) {
        match delivery_result {
            Ok(message) => debug!(
                "Delivered to partition {} at offset {}",
                message.partition(),
                message.offset()
            ),
            Err((err, _message)) => error!("Delivery failed: {}", err),
        }
    }
}
