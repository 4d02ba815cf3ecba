//! Query, command and pipeline construction for the document database.
//!
//! Everything here is a pure function over BSON documents, so the exact
//! shape of what is sent to the database can be tested without one.

use crate::error::{StoreError, StoreResult};
use bson::{Bson, Document, doc};
use docket_core::{NewTodo, OWNERS_COLLECTION, Owner, Todo, TodoPatch};
use time::OffsetDateTime;

/// Current time truncated to the millisecond precision of BSON datetimes.
pub fn now() -> OffsetDateTime {
    bson::DateTime::now().to_time_0_3()
}

/// Filter matching a single document by primary key.
pub fn by_id(id: &str) -> Document {
    doc! { "_id": id }
}

/// Document stored in the `owners` collection.
pub fn owner_document(owner: &Owner) -> Document {
    doc! {
        "_id": owner.id.as_str(),
        "name": owner.name.as_str(),
    }
}

/// Update replacing an owner's name.
pub fn owner_update(owner: &Owner) -> Document {
    doc! { "$set": { "name": owner.name.as_str() } }
}

/// Document stored in the `todos` collection. Only `owner_id` is persisted,
/// never the owner itself.
pub fn todo_document(id: &str, todo: &NewTodo, now: OffsetDateTime) -> Document {
    let now = bson::DateTime::from_time_0_3(now);
    doc! {
        "_id": id,
        "title": todo.title.as_str(),
        "completed": todo.completed,
        "created_at": now,
        "updated_at": now,
        "owner_id": todo.owner_id.as_str(),
    }
}

/// Update replacing title and completed. `owner_id` is left alone.
pub fn todo_update(patch: &TodoPatch, now: OffsetDateTime) -> Document {
    doc! {
        "$set": {
            "title": patch.title.as_str(),
            "completed": patch.completed,
            "updated_at": bson::DateTime::from_time_0_3(now),
        }
    }
}

/// Update marking a todo completed.
pub fn todo_done(now: OffsetDateTime) -> Document {
    doc! {
        "$set": {
            "completed": true,
            "updated_at": bson::DateTime::from_time_0_3(now),
        }
    }
}

/// Stages attaching the owner to each todo. Unmatched todos are preserved
/// with no `owner` field.
fn owner_join_stages() -> [Document; 2] {
    [
        doc! {
            "$lookup": {
                "from": OWNERS_COLLECTION,
                "localField": "owner_id",
                "foreignField": "_id",
                "as": "owner",
            }
        },
        doc! {
            "$unwind": {
                "path": "$owner",
                "preserveNullAndEmptyArrays": true,
            }
        },
    ]
}

/// Aggregate pipeline listing every todo with its owner, newest first.
pub fn list_todos_pipeline() -> Vec<Document> {
    let mut pipeline: Vec<Document> = owner_join_stages().into();
    pipeline.push(doc! { "$sort": { "created_at": -1 } });
    pipeline
}

/// Aggregate pipeline fetching one todo with its owner. The match runs
/// before the join so only a missing todo yields no rows.
pub fn get_todo_pipeline(id: &str) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": by_id(id) }];
    pipeline.extend(owner_join_stages());
    pipeline
}

/// Decode an owner document.
pub fn decode_owner(doc: &Document) -> StoreResult<Owner> {
    let id = doc.get_str("_id")?;
    let name = doc.get_str("name").unwrap_or_default();
    Ok(Owner::new(id, name))
}

/// Decode a joined todo document. A missing or non-document `owner` field
/// becomes the empty owner.
pub fn decode_todo(doc: &Document) -> StoreResult<Todo> {
    let owner = match doc.get("owner") {
        Some(Bson::Document(owner)) => decode_owner(owner)?,
        Some(Bson::Null) | None => Owner::default(),
        Some(other) => {
            return Err(StoreError::Decode(format!(
                "unexpected owner value: {other}"
            )));
        }
    };

    Ok(Todo {
        id: doc.get_str("_id")?.to_string(),
        title: doc.get_str("title")?.to_string(),
        completed: doc.get_bool("completed")?,
        created_at: doc.get_datetime("created_at")?.to_time_0_3(),
        updated_at: doc.get_datetime("updated_at")?.to_time_0_3(),
        owner_id: doc.get_str("owner_id")?.to_string(),
        owner,
    })
}
