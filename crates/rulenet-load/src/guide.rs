//! Help text printed by `--guide` and `--queries`.

pub const QUICK_START: &str = r#"
Quick Start
===========

1. Install Neo4j
   - Neo4j Desktop: https://neo4j.com/download/
   - Or Docker:
       docker run -p 7474:7474 -p 7687:7687 \
         -e NEO4J_AUTH=neo4j/password neo4j:latest

2. Export from RuleNet
   - Select the "Neo4j Cypher" format
   - Click "Export" to save the .json file

3. Load into Neo4j
   rulenet-load my_graph.json --password yourpassword

   Connection settings can also come from rulenet.toml ([neo4j] section)
   or RULENET__NEO4J__URI / RULENET__NEO4J__USER / RULENET__NEO4J__PASSWORD.

4. Explore in Neo4j Browser
   - Open http://localhost:7474
   - Run: MATCH (n) RETURN n
"#;

pub const SAMPLE_QUERIES: &str = r#"
Sample Cypher Queries
=====================

// Show all nodes
MATCH (n) RETURN n

// Show all relationships
MATCH (a)-[r]->(b) RETURN a, r, b

// Find nodes by type
MATCH (p:person) RETURN p

// Find paths between nodes
MATCH path = (a)-[*1..3]->(b)
WHERE a.label = 'Dr. Smith'
RETURN path

// Count nodes by type
MATCH (n) RETURN labels(n)[0] AS type, count(n) AS count

// Find authors and their papers
MATCH (p:person)-[:authored]->(paper:paper)
RETURN p.label AS author, paper.label AS paper

// Graph statistics
CALL apoc.meta.stats() YIELD labels, relTypes
RETURN labels, relTypes
"#;
