//! Sample notebook documents.

/// A Zeppelin note with a markdown, a pyspark and a SQL paragraph plus one
/// empty paragraph.
pub const ZEPPELIN_NOTE: &str = r#"{
  "name": "Sales Overview",
  "id": "2A94M5J1Z",
  "paragraphs": [
    {
      "text": "%md\n## Sales by region",
      "config": {"editorSetting": {"language": "markdown"}},
      "results": {"code": "SUCCESS", "msg": []}
    },
    {
      "text": "%pyspark\ndf = spark.table('sales')\ndf.groupBy('region').sum().show()",
      "config": {"editorSetting": {"language": "python"}}
    },
    {
      "text": "%sql\nselect region, sum(amount) from sales group by region"
    },
    {
      "config": {}
    }
  ]
}"#;

/// A minimal canonical (nbformat 4) notebook with one code cell.
pub const IPYNB_NOTEBOOK: &str = r#"{
  "metadata": {
    "language_info": {
      "name": "python"
    }
  },
  "nbformat": 4,
  "nbformat_minor": 0,
  "cells": [
    {
      "cell_type": "code",
      "metadata": {
        "cell_id": 0,
        "language": "python"
      },
      "source": [
        "print('hello')"
      ],
      "outputs": []
    }
  ]
}"#;
