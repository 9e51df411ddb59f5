//! Descriptor parsing tests
//!
//! Tests `artifactId` extraction against full-size POM documents.

use pomlist_scanner::extract::{decode_descriptor, read_artifact_id};
use pomlist_scanner::{parse_artifact_id, DescriptorError};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Realistic descriptors
// =============================================================================

#[test]
fn test_parse_full_bundle_pom() {
    let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!--
    Licensed to the Apache Software Foundation (ASF) under one
    or more contributor license agreements.
-->
<project xmlns="http://maven.apache.org/POM/4.0.0"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/maven-v4_0_0.xsd">

    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.apache.sling</groupId>
        <artifactId>sling</artifactId>
        <version>5-incubator</version>
        <relativePath>../../parent/pom.xml</relativePath>
    </parent>

    <artifactId>org.apache.sling.jcr.resource</artifactId>
    <packaging>bundle</packaging>
    <version>2.0.0-incubator-SNAPSHOT</version>

    <dependencies>
        <dependency>
            <groupId>org.apache.sling</groupId>
            <artifactId>org.apache.sling.api</artifactId>
        </dependency>
    </dependencies>
</project>
"#;
    let id = parse_artifact_id(content).expect("Should parse");
    assert_eq!(id.as_str(), "org.apache.sling.jcr.resource");
}

#[test]
fn test_parse_pom_with_doctype() {
    let content = r#"<?xml version="1.0"?>
<!DOCTYPE project>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <artifactId>org.apache.sling.scripting.jsp</artifactId>
</project>
"#;
    let id = parse_artifact_id(content).expect("DOCTYPE should be accepted");
    assert_eq!(id.as_str(), "org.apache.sling.scripting.jsp");
}

#[test]
fn test_read_latin1_pom() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("pom.xml");

    let mut bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <developers><developer><name>M"#
        .to_vec();
    bytes.push(0xFC); // u-umlaut in Latin-1
    bytes.extend_from_slice(
        br"ller</name></developer></developers>
    <artifactId>org.apache.sling.i18n</artifactId>
</project>
",
    );
    fs::write(&path, &bytes).expect("Failed to write pom.xml");

    let id = read_artifact_id(&path).expect("Latin-1 descriptor should be read");
    assert_eq!(id.as_str(), "org.apache.sling.i18n");
    assert!(decode_descriptor(&bytes).unwrap().contains("M\u{fc}ller"));
}

#[test]
fn test_parse_artifact_id_after_dependencies() {
    // Element order inside <project> does not matter
    let content = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
    <dependencies>
        <dependency><artifactId>junit</artifactId></dependency>
    </dependencies>
    <artifactId>late</artifactId>
</project>"#;
    assert_eq!(parse_artifact_id(content).unwrap().as_str(), "late");
}

#[test]
fn test_parse_cdata_and_comment_inside_element() {
    let content = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
    <artifactId>
        <!-- renamed during graduation -->
        <![CDATA[org.apache.sling.launchpad]]>
    </artifactId>
</project>"#;
    assert_eq!(
        parse_artifact_id(content).unwrap().as_str(),
        "org.apache.sling.launchpad"
    );
}

// =============================================================================
// Failure branches
// =============================================================================

#[test]
fn test_parse_foreign_namespace_is_missing() {
    let content = r#"<project xmlns="http://maven.apache.org/POM/3.0.0">
    <artifactId>old</artifactId>
</project>"#;
    assert!(matches!(
        parse_artifact_id(content),
        Err(DescriptorError::MissingArtifactId)
    ));
}

#[test]
fn test_parse_truncated_document() {
    let content = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
    <artifactId>org.apache.sling.api</artifactId>"#;
    assert!(matches!(
        parse_artifact_id(content),
        Err(DescriptorError::Xml(_))
    ));
}

#[test]
fn test_parse_empty_file() {
    assert!(matches!(parse_artifact_id(""), Err(DescriptorError::Xml(_))));
}
