use hyper::{
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use juniper::{DefaultScalarValue, EmptySubscription, GraphQLTypeAsync, RootNode};
use std::error::Error;
use std::net::SocketAddr;
use std::{convert::Infallible, sync::Arc};

use crate::gql::Context;

/// Routes one request against a service schema.
///
/// GET on the endpoint serves the Playground page; POST executes the GraphQL
/// envelope in the body. juniper_hyper answers 200 when execution succeeded
/// and 400 for validation failures or an unparseable body.
pub async fn handle<Q, M>(
    root_node: Arc<RootNode<'static, Q, M, EmptySubscription<Context>>>,
    ctx: Arc<Context>,
    req: Request<Body>,
) -> Response<Body>
where
    Q: GraphQLTypeAsync<DefaultScalarValue, Context = Context> + Send + Sync + 'static,
    Q::TypeInfo: Send + Sync,
    M: GraphQLTypeAsync<DefaultScalarValue, Context = Context> + Send + Sync + 'static,
    M::TypeInfo: Send + Sync,
{
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/graphql") => juniper_hyper::playground("/graphql", None).await,
        (&Method::POST, "/graphql") => juniper_hyper::graphql(root_node, ctx, req).await,
        _ => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}

/// # Errors
///
/// Will return Err if the server fails to bind or dies while running
pub async fn serve<Q, M>(
    addr: SocketAddr,
    root_node: RootNode<'static, Q, M, EmptySubscription<Context>>,
    ctx: Context,
) -> Result<(), Box<dyn Error>>
where
    Q: GraphQLTypeAsync<DefaultScalarValue, Context = Context> + Send + Sync + 'static,
    Q::TypeInfo: Send + Sync,
    M: GraphQLTypeAsync<DefaultScalarValue, Context = Context> + Send + Sync + 'static,
    M::TypeInfo: Send + Sync,
{
    let root_node = Arc::new(root_node);
    let ctx = Arc::new(ctx);

    let new_service = make_service_fn(move |_| {
        let root_node = root_node.clone();
        let ctx = ctx.clone();

        async {
            Ok::<_, hyper::Error>(service_fn(move |req| {
                let root_node = root_node.clone();
                let ctx = ctx.clone();
                async move { Ok::<_, Infallible>(handle(root_node, ctx, req).await) }
            }))
        }
    });

    let server = Server::bind(&addr).serve(new_service);
    println!("Listening on http://{}", addr);

    server.await?;

    Ok(())
}
